//! Looping horizontal marquee for single-line text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marquee timing and spacing, in app ticks and terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marquee {
    /// Ticks before the first step
    pub initial_delay: u64,
    /// Ticks per one-column step
    pub ticks_per_step: u64,
    /// Minimum blank columns between repetitions
    pub min_gap: usize,
}

impl Default for Marquee {
    /// At a 16ms tick: ~1.2s pause, then ~10 columns per second.
    fn default() -> Self {
        Self {
            initial_delay: 75,
            ticks_per_step: 6,
            min_gap: 3,
        }
    }
}

impl Marquee {
    /// Visible slice of `text` for a `width`-column slot at `tick`.
    ///
    /// Text that fits is returned unchanged. Otherwise the text scrolls left
    /// one column per step, followed by a gap of a third of the slot width,
    /// and repeats forever. The result is exactly `width` columns wide; a
    /// wide character cut at either edge is replaced by spaces.
    pub fn window(&self, text: &str, width: usize, tick: u64) -> String {
        let text_width = text.width();
        if width == 0 {
            return String::new();
        }
        if text_width <= width {
            return text.to_string();
        }

        let gap = (width / 3).max(self.min_gap);
        let cycle = text_width + gap;
        let steps = tick.saturating_sub(self.initial_delay) / self.ticks_per_step.max(1);
        let offset = (steps % cycle as u64) as usize;

        let mut out = String::with_capacity(width * 2);
        let mut column = 0usize;
        let mut filled = 0usize;

        let cells = text
            .chars()
            .map(|c| (c, c.width().unwrap_or(0)))
            .chain(std::iter::repeat((' ', 1)).take(gap));

        // Two passes over the cycle always cover offset + width.
        for (c, w) in cells.clone().chain(cells) {
            if filled >= width {
                break;
            }
            let start = column;
            column += w;
            if column <= offset {
                continue;
            }
            if start < offset {
                // Wide character straddling the left edge.
                let visible = column - offset;
                out.extend(std::iter::repeat(' ').take(visible.min(width - filled)));
                filled += visible.min(width - filled);
                continue;
            }
            if filled + w > width {
                out.extend(std::iter::repeat(' ').take(width - filled));
                break;
            }
            out.push(c);
            filled += w;
        }

        out
    }

    /// Whether `text` will scroll in a slot of `width` columns.
    pub fn scrolls(text: &str, width: usize) -> bool {
        text.width() > width
    }
}
