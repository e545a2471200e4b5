//! User actions on the release screen.

use super::App;
use crate::release::compute_title_bar;
use crate::traits::{DownloadOutcome, ShareOutcome};
use crate::view_state::StatusKind;

impl App {
    /// Pull-to-refresh.
    pub fn refresh(&mut self) {
        self.focused_asset = None;
        self.view_model.refresh();
        self.mark_dirty();
    }

    /// Retry a failed load, or refresh when nothing failed.
    pub fn retry_or_refresh(&mut self) {
        if self.view_model.error().is_some() {
            self.view_model.retry();
            self.mark_dirty();
        } else {
            self.refresh();
        }
    }

    /// Share the release URL. Only available once details have loaded.
    pub fn share(&mut self) {
        let state = compute_title_bar(
            self.view_model.details(),
            self.view_model.is_loading(),
            self.scroll.overlap(),
        );
        let Some(action) = state.share else {
            return;
        };

        match self.share.share_text(&action.url) {
            Ok(ShareOutcome::Copied) => {
                self.set_status("Release link copied to clipboard", StatusKind::Success)
            }
            Ok(ShareOutcome::Opened) => {
                self.set_status("Release opened in browser", StatusKind::Success)
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), error = %err, "Share failed");
                self.set_status(err.user_message(), StatusKind::Error);
            }
        }
    }

    /// Open the release page in the browser.
    pub fn open_in_browser(&mut self) {
        let Some(url) = self.view_model.details().map(|d| d.url.clone()) else {
            return;
        };
        match (self.opener)(&url) {
            Ok(()) => self.set_status("Opened in browser", StatusKind::Info),
            Err(err) => self.set_status(err.user_message(), StatusKind::Error),
        }
    }

    /// Hand the focused asset to the download handler.
    pub fn download_focused(&mut self) {
        if let Some(index) = self.focused_asset {
            self.download(index);
        }
    }

    pub fn download(&mut self, index: usize) {
        let Some(asset) = self.view_model.assets().get(index).cloned() else {
            return;
        };
        self.focused_asset = Some(index);
        match self.downloads.on_download_click(&asset) {
            DownloadOutcome::Started { file_name } => {
                self.set_status(format!("Downloading {}", file_name), StatusKind::Info)
            }
            DownloadOutcome::Unsupported => self.set_status(
                format!("Downloads are not supported yet ({})", asset.name),
                StatusKind::Info,
            ),
        }
    }

    /// Move asset focus by `delta`, wrapping, and scroll it into view.
    pub fn move_focus(&mut self, delta: isize) {
        let count = self.view_model.assets().item_count();
        if count == 0 {
            self.focused_asset = None;
            return;
        }

        let next = match self.focused_asset {
            None if delta < 0 => count - 1,
            None => 0,
            Some(current) => (current as isize + delta).rem_euclid(count as isize) as usize,
        };
        self.focused_asset = Some(next);

        if let Some(&line) = self.layout.asset_lines.get(next) {
            self.scroll.ensure_visible(line);
        }
        self.mark_dirty();
    }

    /// Pop this screen; quitting once the stack is empty.
    pub fn go_back(&mut self) {
        self.navigator.back();
        if self.navigator.is_empty() {
            self.quit();
        }
    }
}
