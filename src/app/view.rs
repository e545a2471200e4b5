//! View state construction for UI rendering.

use chrono::Utc;
use ratatui::Frame;

use super::{is_complete, App};
use crate::ui;
use crate::view_state::ReleaseViewState;

impl App {
    /// Draw one frame and keep the measured layout.
    ///
    /// The view state borrows individual fields so the markdown cache can be
    /// borrowed mutably alongside it.
    pub fn draw(&mut self, frame: &mut Frame) {
        let view = ReleaseViewState {
            details: self.view_model.details(),
            assets: self.view_model.assets(),
            is_loading: self.view_model.is_loading(),
            is_appending: self.view_model.is_appending(),
            is_complete: is_complete(&self.view_model.assets().load_states().append),
            error: self.view_model.error(),
            scroll: &self.scroll,
            focused_asset: self.focused_asset,
            status: self.status.as_ref(),
            tick_count: self.tick_count,
            now: Utc::now(),
        };

        let layout = ui::render(frame, &view, &mut self.markdown_cache);
        self.apply_layout(layout);
    }
}
