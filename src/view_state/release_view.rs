//! Borrowed snapshot of the release screen for rendering.

use chrono::{DateTime, Utc};

use super::{ScrollState, StatusLine};
use crate::models::{ReleaseAsset, ReleaseDetails};
use crate::paging::PagedItems;

/// Everything the UI reads to draw one frame.
///
/// Built fresh by the app before every draw; the lifetime is the borrow of
/// the app's fields.
pub struct ReleaseViewState<'a> {
    pub details: Option<&'a ReleaseDetails>,
    pub assets: &'a PagedItems<ReleaseAsset>,
    /// First page in flight
    pub is_loading: bool,
    /// Later page in flight
    pub is_appending: bool,
    /// True when every asset page has been loaded
    pub is_complete: bool,
    pub error: Option<&'a str>,
    pub scroll: &'a ScrollState,
    /// Index into `assets`
    pub focused_asset: Option<usize>,
    pub status: Option<&'a StatusLine>,
    /// Animation clock for the spinner and marquee
    pub tick_count: u64,
    /// Reference time for relative timestamps
    pub now: DateTime<Utc>,
}

/// Layout facts measured while drawing, fed back into the app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderLayout {
    pub total_lines: usize,
    pub viewport_height: usize,
    pub header_height: usize,
    /// Screen row of the first content line
    pub content_top: u16,
    /// Content line of each asset row, by asset index
    pub asset_lines: Vec<usize>,
    pub last_visible_asset: Option<usize>,
    /// Something on screen animates (spinner or marquee)
    pub animating: bool,
    /// The collapsed title was drawn with non-zero opacity
    pub title_visible: bool,
}

impl RenderLayout {
    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport_height)
    }

    /// Asset under a screen row, given the scroll offset used for the frame.
    pub fn asset_at_row(&self, row: u16, offset: usize) -> Option<usize> {
        let relative = row.checked_sub(self.content_top)? as usize;
        if relative >= self.viewport_height {
            return None;
        }
        let line = offset + relative;
        self.asset_lines.iter().position(|&l| l == line)
    }
}
