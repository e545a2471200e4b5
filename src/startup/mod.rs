//! Startup: command line, environment and logging.
//!
//! - [`config`] - `AppConfig` and argument parsing
//! - [`logging`] - file-backed tracing subscriber
//!
//! ```ignore
//! use gloom::startup::{parse_args, AppConfig, CliCommand};
//!
//! if let CliCommand::Run { target } = parse_args(std::env::args().skip(1))? {
//!     let config = AppConfig::from_env(target)?;
//!     gloom::startup::init_tracing(&config.log_filter, config.log_file.as_deref());
//! }
//! ```

pub mod config;
pub mod logging;

pub use config::{parse_args, AppConfig, CliCommand, DEFAULT_PAGE_SIZE, USAGE};
pub use logging::{default_log_path, init_tracing, open_log_file};
