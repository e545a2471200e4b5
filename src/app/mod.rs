//! Application state and logic for the TUI.
//!
//! - [`App`] - screen state, collaborators and the message channel
//! - [`ReleaseViewModel`] - release snapshot and page loading
//! - [`Navigator`] / [`ScreenKey`] - back stack and screen identity
//! - [`AppMessage`] - messages from background fetch tasks

mod actions;
mod handlers;
mod messages;
mod navigation;
mod view;
mod view_model;

pub use messages::AppMessage;
pub use navigation::{Navigator, ScreenIdGenerator, ScreenKey};
pub use view_model::{is_complete, ReleaseViewModel};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::GloomError;
use crate::markdown::MarkdownCache;
use crate::startup::AppConfig;
use crate::traits::{DownloadHandler, ReleaseSource, ShareTarget};
use crate::view_state::{RenderLayout, ScrollState, StatusKind, StatusLine};

/// Opens a URL outside the terminal.
pub type UrlOpener = fn(&str) -> Result<(), GloomError>;

/// Main application state
pub struct App {
    pub view_model: ReleaseViewModel,
    share: Arc<dyn ShareTarget>,
    downloads: Arc<dyn DownloadHandler>,
    opener: UrlOpener,
    pub navigator: Navigator,
    pub scroll: ScrollState,
    /// Asset highlighted for download, by index
    pub focused_asset: Option<usize>,
    pub status: Option<StatusLine>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Dirty flag; the loop only draws when set
    pub needs_redraw: bool,
    /// Taken by the event loop for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub markdown_cache: MarkdownCache,
    pub prefetch_distance: usize,
    /// Layout measured by the last draw
    pub layout: RenderLayout,
}

impl App {
    /// Create the app with one release screen on the stack.
    ///
    /// Nothing is fetched until [`App::start`].
    pub fn new(
        config: &AppConfig,
        source: Arc<dyn ReleaseSource>,
        share: Arc<dyn ShareTarget>,
        downloads: Arc<dyn DownloadHandler>,
        ids: &ScreenIdGenerator,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let view_model = ReleaseViewModel::new(
            config.target.clone(),
            source,
            message_tx.clone(),
            config.page_size,
        );

        let mut navigator = Navigator::new();
        navigator.push(ids.key_for(&config.target));

        Self {
            view_model,
            share,
            downloads,
            opener: crate::adapters::open_in_browser,
            navigator,
            scroll: ScrollState::new(),
            focused_asset: None,
            status: None,
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            markdown_cache: MarkdownCache::new(),
            prefetch_distance: config.prefetch_distance,
            layout: RenderLayout::default(),
        }
    }

    /// Replace the browser launcher.
    pub fn with_opener(mut self, opener: UrlOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Issue the initial load. Requires a Tokio runtime.
    pub fn start(&mut self) {
        self.view_model.refresh();
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations, expire the status line and prefetch.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self
            .status
            .as_ref()
            .is_some_and(|status| status.is_expired(self.tick_count))
        {
            self.status = None;
            self.mark_dirty();
        }

        if self.layout.animating {
            self.mark_dirty();
        }

        if let Some(last_visible) = self.layout.last_visible_asset {
            if self
                .view_model
                .maybe_prefetch(last_visible, self.prefetch_distance)
            {
                self.mark_dirty();
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        let status = StatusLine::new(text, kind, self.tick_count);
        match kind {
            StatusKind::Error => tracing::warn!(status = %status.text, "Status"),
            _ => tracing::debug!(status = %status.text, "Status"),
        }
        self.status = Some(status);
        self.mark_dirty();
    }

    /// Store the layout from the last draw and re-clamp scrolling to it.
    pub fn apply_layout(&mut self, layout: RenderLayout) {
        self.scroll.viewport_height = layout.viewport_height;
        self.scroll.header_height = layout.header_height;
        self.scroll.set_max_offset(layout.max_offset());
        self.scroll.note_title_visible(layout.title_visible, self.tick_count);
        if let Some(focused) = self.focused_asset {
            if focused >= layout.asset_lines.len() {
                self.focused_asset = layout.asset_lines.len().checked_sub(1);
            }
        }
        self.layout = layout;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_pushes_screen() {
        let h = harness();
        assert_eq!(h.app.navigator.depth(), 1);
        assert_eq!(
            h.app.navigator.current().map(|k| k.route.as_str()),
            Some("acme/widget-v1.2.0")
        );
        assert!(h.app.needs_redraw);
    }

    #[test]
    fn test_status_expires() {
        let mut h = harness();
        h.app.set_status("Copied", StatusKind::Success);
        for _ in 0..crate::view_state::STATUS_TTL_TICKS {
            h.app.tick();
        }
        assert!(h.app.status.is_none());
    }

    #[test]
    fn test_apply_layout_clamps_focus_and_scroll() {
        let mut h = harness();
        h.app.scroll.offset = 50;
        h.app.focused_asset = Some(4);
        h.app.apply_layout(RenderLayout {
            total_lines: 20,
            viewport_height: 10,
            header_height: 3,
            asset_lines: vec![15, 16],
            ..Default::default()
        });
        assert_eq!(h.app.scroll.offset, 10);
        assert_eq!(h.app.scroll.header_height, 3);
        assert_eq!(h.app.focused_asset, Some(1));
    }

    #[tokio::test]
    async fn test_tick_prefetches_near_end() {
        let mut h = loaded().await;
        h.app.layout.last_visible_asset = Some(1);
        h.app.tick();
        assert!(h.app.view_model.is_appending());
    }
}
