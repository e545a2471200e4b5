//! Scroll state for the release screen
//!
//! Offsets count rendered lines from the top of the content list. The UI
//! refreshes `max_offset`, `viewport_height` and `header_height` on every
//! draw, so clamping always uses last frame's layout.

use crate::release::overlap_fraction;

/// Wheel-up events at the top needed to trigger a refresh.
pub const PULL_THRESHOLD: u8 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First visible content line
    pub offset: usize,
    /// Largest valid offset (calculated during render)
    pub max_offset: usize,
    /// Content rows on screen (calculated during render)
    pub viewport_height: usize,
    /// Lines taken by the header sections (calculated during render)
    pub header_height: usize,
    /// Consecutive wheel-up events while already at the top
    pub pull_count: u8,
    /// Tick of the first frame the collapsed title was visible, cleared
    /// when it fades out again
    pub title_shown_at: Option<u64>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset
    }

    /// Move by `delta` lines, clamped to `0..=max_offset`. Resets any pull
    /// in progress. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.pull_count = 0;
        let before = self.offset;
        self.offset = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize).min(self.max_offset)
        };
        self.offset != before
    }

    /// Viewport height minus one line of overlap.
    pub fn page(&self) -> isize {
        self.viewport_height.saturating_sub(1).max(1) as isize
    }

    pub fn scroll_to_top(&mut self) {
        self.pull_count = 0;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.pull_count = 0;
        self.offset = self.max_offset;
    }

    /// Scroll the minimum amount that puts `line` on screen.
    pub fn ensure_visible(&mut self, line: usize) {
        if line < self.offset {
            self.offset = line;
        } else if self.viewport_height > 0 && line >= self.offset + self.viewport_height {
            self.offset = (line + 1 - self.viewport_height).min(self.max_offset);
        }
    }

    /// Record one wheel-up at the top. Returns `true` once the pull
    /// completes, and starts counting again.
    pub fn pull(&mut self) -> bool {
        if !self.is_at_top() {
            self.pull_count = 0;
            return false;
        }
        self.pull_count += 1;
        if self.pull_count >= PULL_THRESHOLD {
            self.pull_count = 0;
            true
        } else {
            false
        }
    }

    /// Header overlap fraction driving the title bar.
    pub fn overlap(&self) -> f32 {
        overlap_fraction(self.offset, self.header_height)
    }

    /// Marquee clock for the title bar: ticks since the title appeared, so
    /// the subtitle always starts with its initial pause.
    pub fn marquee_tick(&self, tick: u64) -> u64 {
        self.title_shown_at.map_or(0, |shown| tick.saturating_sub(shown))
    }

    /// Record whether the last frame showed the title.
    pub fn note_title_visible(&mut self, visible: bool, tick: u64) {
        if !visible {
            self.title_shown_at = None;
        } else if self.title_shown_at.is_none() {
            self.title_shown_at = Some(tick);
        }
    }

    /// Re-clamp after a layout change.
    pub fn set_max_offset(&mut self, max_offset: usize) {
        self.max_offset = max_offset;
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(offset: usize, max_offset: usize, viewport_height: usize) -> ScrollState {
        ScrollState {
            offset,
            max_offset,
            viewport_height,
            header_height: 4,
            pull_count: 0,
            title_shown_at: None,
        }
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut s = state(0, 10, 5);
        assert!(!s.scroll_by(-3));
        assert!(s.scroll_by(4));
        assert_eq!(s.offset, 4);
        s.scroll_by(100);
        assert_eq!(s.offset, 10);
        assert!(s.is_at_bottom());
    }

    #[test]
    fn test_ensure_visible() {
        let mut s = state(5, 20, 4);
        s.ensure_visible(2);
        assert_eq!(s.offset, 2);
        s.ensure_visible(9);
        assert_eq!(s.offset, 6);
        s.ensure_visible(7);
        assert_eq!(s.offset, 6);
    }

    #[test]
    fn test_pull_needs_threshold_at_top() {
        let mut s = state(0, 10, 5);
        assert!(!s.pull());
        assert!(!s.pull());
        assert!(s.pull());
        assert_eq!(s.pull_count, 0);

        let mut s = state(3, 10, 5);
        assert!(!s.pull());
        assert_eq!(s.pull_count, 0);
    }

    #[test]
    fn test_scrolling_cancels_pull() {
        let mut s = state(0, 10, 5);
        s.pull();
        s.pull();
        s.scroll_by(1);
        s.scroll_by(-1);
        assert!(!s.pull());
    }

    #[test]
    fn test_overlap_tracks_header() {
        let mut s = state(0, 10, 5);
        assert_eq!(s.overlap(), 0.0);
        s.scroll_by(2);
        assert_eq!(s.overlap(), 0.5);
        s.scroll_by(8);
        assert_eq!(s.overlap(), 1.0);
    }

    #[test]
    fn test_marquee_clock_restarts_with_title() {
        let mut s = state(3, 10, 5);
        assert_eq!(s.marquee_tick(1250), 0);

        s.note_title_visible(true, 1250);
        s.note_title_visible(true, 1260);
        assert_eq!(s.marquee_tick(1300), 50);

        s.note_title_visible(false, 1400);
        assert_eq!(s.marquee_tick(2000), 0);
        s.note_title_visible(true, 2000);
        assert_eq!(s.marquee_tick(2010), 10);
    }

    #[test]
    fn test_set_max_offset_reclamps() {
        let mut s = state(8, 10, 5);
        s.set_max_offset(3);
        assert_eq!(s.offset, 3);
    }
}
