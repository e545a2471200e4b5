//! Collapsing title bar.
//!
//! ```text
//! ←  acme / widget                 ⠋  [s] share
//!    Widget 1.2: the one with a long na
//! ─────────────────────────────────────────────
//! ```
//!
//! The two title lines fade in as the release header scrolls under the bar.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::release::{Marquee, TitleRenderState, TitleText, title_bar::TITLE_SEPARATOR};
use crate::ui::helpers::{fade, spinner_frame, truncate_to_width};
use crate::ui::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Rows used by the title bar, including its bottom border.
pub const TITLE_BAR_HEIGHT: u16 = 3;

const BACK_GLYPH: &str = "← ";
const SHARE_HINT: &str = "[s] share";

/// Draw the bar. Returns whether the subtitle marquee is scrolling.
///
/// `tick` drives the spinner; `marquee_tick` counts from the frame the title
/// first appeared.
pub fn render_title_bar(
    frame: &mut Frame,
    area: Rect,
    state: &TitleRenderState,
    is_loading: bool,
    tick: u64,
    marquee_tick: u64,
) -> bool {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let right_width = right_width(state.share.is_some(), is_loading);
    let [back, title, right] = Layout::horizontal([
        Constraint::Length(BACK_GLYPH.width() as u16 + 1),
        Constraint::Min(1),
        Constraint::Length(right_width),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(BACK_GLYPH, Style::new().fg(COLOR_ACCENT))),
        back,
    );

    let mut right_spans = Vec::new();
    if is_loading {
        right_spans.push(Span::styled(spinner_frame(tick), Style::new().fg(COLOR_ACTIVE)));
        right_spans.push(Span::raw("  "));
    }
    if state.share.is_some() {
        right_spans.push(Span::styled(SHARE_HINT, Style::new().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(right_spans)), right);

    match &state.title {
        Some(text) if text.opacity > 0.0 => {
            let (lines, scrolling) = title_lines(text, title.width as usize, marquee_tick);
            frame.render_widget(Paragraph::new(lines), title);
            scrolling
        }
        _ => false,
    }
}

fn right_width(share: bool, loading: bool) -> u16 {
    let mut width = 0;
    if loading {
        width += 3;
    }
    if share {
        width += SHARE_HINT.width() as u16;
    }
    width + 1
}

/// The two faded title lines for a `width`-column slot.
///
/// Line 1 keeps the separator as its own de-emphasized span. Line 2 is a
/// single line that scrolls as a marquee when it does not fit.
pub fn title_lines(text: &TitleText, width: usize, tick: u64) -> (Vec<Line<'static>>, bool) {
    let strong = Style::new()
        .fg(fade(COLOR_HEADER, text.opacity))
        .add_modifier(Modifier::BOLD);
    let dim = Style::new().fg(fade(COLOR_DIM, text.opacity));

    let line1 = if text.line1().width() <= width {
        Line::from(vec![
            Span::styled(text.owner.clone(), strong),
            Span::styled(TITLE_SEPARATOR, dim),
            Span::styled(text.repository.clone(), strong),
        ])
    } else {
        Line::from(Span::styled(truncate_to_width(&text.line1(), width), strong))
    };

    let marquee = Marquee::default();
    let scrolling = Marquee::scrolls(&text.subtitle, width);
    let line2 = Line::from(Span::styled(
        marquee.window(&text.subtitle, width, tick),
        Style::new().fg(fade(COLOR_HEADER, text.opacity)),
    ));

    (vec![line1, line2], scrolling)
}
