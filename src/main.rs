use gloom::adapters::{ReqwestHttpClient, SystemShare, UnsupportedDownloads};
use gloom::app::{App, AppMessage, ScreenIdGenerator};
use gloom::github::GithubClient;
use gloom::startup::{init_tracing, parse_args, AppConfig, CliCommand, USAGE};
use gloom::terminal::{setup_panic_hook, TerminalManager};
use gloom::traits::ReleaseSource;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame interval for animations (spinner, marquee).
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let target = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run { target }) => target,
        Ok(CliCommand::Version) => {
            println!("gloom {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("gloom: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = AppConfig::from_env(target)?;
    let log_path = init_tracing(&config.log_filter, config.log_file.as_deref());
    tracing::info!(
        version = VERSION,
        release = %config.target,
        api_url = %config.api_url,
        authenticated = config.token.is_some(),
        log = ?log_path,
        "Starting gloom"
    );

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let source: Arc<dyn ReleaseSource> = Arc::new(GithubClient::new(
        ReqwestHttpClient::new(),
        config.api_url.clone(),
        config.token.clone(),
    ));
    let ids = ScreenIdGenerator::new();
    let mut app = App::new(
        &config,
        source,
        Arc::new(SystemShare::new()),
        Arc::new(UnsupportedDownloads),
        &ids,
    );

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Exited with error");
    } else {
        tracing::info!("Exited");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Owned here so it can sit in select! next to the event stream
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    app.start();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| app.draw(f))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
