//! Helper functions and constants for UI rendering
//!
//! Spinner frames, color fading for the collapsing title, and word wrapping
//! of styled lines.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::COLOR_BACKGROUND;

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks each spinner frame stays on screen
const SPINNER_TICKS_PER_FRAME: u64 = 5;

pub fn spinner_frame(tick: u64) -> &'static str {
    let index = (tick / SPINNER_TICKS_PER_FRAME) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[index]
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::White => Some((255, 255, 255)),
        Color::Gray => Some((192, 192, 192)),
        Color::DarkGray => Some((128, 128, 128)),
        Color::Black => Some((0, 0, 0)),
        _ => None,
    }
}

/// Blend `color` toward the background. Terminals have no alpha, so
/// opacity is approximated by interpolating RGB.
pub fn fade(color: Color, opacity: f32) -> Color {
    if opacity >= 1.0 {
        return color;
    }
    let (Some(fg), Some(bg)) = (rgb(color), rgb(COLOR_BACKGROUND)) else {
        return color;
    };
    let t = opacity.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * t).round() as u8;
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}

/// Display width of a line.
pub fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Cut `text` to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Word-wrap a styled line to `max_width` columns.
///
/// Spaces at a break are dropped; words wider than the whole line are split
/// by character. Continuation lines start with `indent` spaces. Always
/// returns at least one line.
pub fn wrap_line(line: Line<'static>, max_width: usize, indent: usize) -> Vec<Line<'static>> {
    if max_width == 0 || line_width(&line) <= max_width {
        return vec![line];
    }
    let indent = indent.min(max_width / 2);
    let line_style = line.style;

    let mut out: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut width = 0usize;
    // Whether the current output line holds a word yet; the indent alone
    // does not count.
    let mut has_content = false;

    // Split into (word, style) and (space, style) tokens.
    let mut tokens: Vec<(String, Style, bool)> = Vec::new();
    for span in &line.spans {
        let mut current = String::new();
        let mut current_is_space = false;
        for c in span.content.chars() {
            let is_space = c == ' ';
            if !current.is_empty() && is_space != current_is_space {
                tokens.push((std::mem::take(&mut current), span.style, current_is_space));
            }
            current_is_space = is_space;
            current.push(c);
        }
        if !current.is_empty() {
            tokens.push((current, span.style, current_is_space));
        }
    }

    let mut flush = |spans: &mut Vec<Span<'static>>, width: &mut usize| {
        let mut finished = Line::from(std::mem::take(spans));
        finished.style = line_style;
        out.push(finished);
        if indent > 0 {
            spans.push(Span::raw(" ".repeat(indent)));
        }
        *width = indent;
    };

    // Spaces are held back until the next word is known to fit.
    let mut pending: Option<(String, Style)> = None;

    for (text, style, is_space) in tokens {
        if is_space {
            if has_content {
                pending = Some((text, style));
            }
            continue;
        }

        let token_width = text.width();
        let gap = pending.as_ref().map_or(0, |(space, _)| space.width());
        if width + gap + token_width > max_width && has_content {
            flush(&mut spans, &mut width);
            has_content = false;
            pending = None;
        } else if let Some((space, space_style)) = pending.take() {
            spans.push(Span::styled(space, space_style));
            width += gap;
        }

        if width + token_width <= max_width {
            spans.push(Span::styled(text, style));
            width += token_width;
            has_content = true;
            continue;
        }

        // Longer than a whole line: split by character.
        let mut chunk = String::new();
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if width + w > max_width && (has_content || !chunk.is_empty()) {
                if !chunk.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                flush(&mut spans, &mut width);
                has_content = false;
            }
            chunk.push(c);
            width += w;
        }
        if !chunk.is_empty() {
            spans.push(Span::styled(chunk, style));
            has_content = true;
        }
    }

    if has_content || out.is_empty() {
        let mut finished = Line::from(spans);
        finished.style = line_style;
        out.push(finished);
    }
    out
}

/// Wrap every line; see [`wrap_line`].
pub fn wrap_lines(lines: Vec<Line<'static>>, max_width: usize, indent: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, max_width, indent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(5), SPINNER_FRAMES[1]);
        assert_eq!(spinner_frame(50), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(Color::White, 1.0), Color::White);
        assert_eq!(fade(Color::White, 0.0), COLOR_BACKGROUND);
        assert_ne!(fade(Color::White, 0.5), Color::White);
        // Named colors without RGB values are left alone.
        assert_eq!(fade(Color::Cyan, 0.5), Color::Cyan);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("widget-linux.tar.gz", 8), "widget-…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_wrap_fits_untouched() {
        let lines = wrap_line(Line::from("hello world"), 20, 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "hello world");
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        let lines = wrap_line(Line::from("the quick brown fox jumps"), 10, 0);
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(texts, vec!["the quick", "brown fox", "jumps"]);
        for line in &lines {
            assert!(line_width(line) <= 10);
        }
    }

    #[test]
    fn test_wrap_keeps_styles() {
        let line = Line::from(vec![
            Span::raw("see "),
            Span::styled("https://example.com/very/long", Style::new().fg(Color::Blue)),
        ]);
        let lines = wrap_line(line, 12, 0);
        assert!(lines.len() > 1);
        assert!(lines
            .iter()
            .skip(1)
            .all(|l| l.spans.iter().all(|s| s.style.fg == Some(Color::Blue) || s.content.trim().is_empty())));
        for line in &lines {
            assert!(line_width(line) <= 12);
        }
    }

    #[test]
    fn test_wrap_indents_continuations() {
        let lines = wrap_line(Line::from("- one two three four"), 9, 2);
        assert_eq!(text(&lines[0]), "- one two");
        assert!(text(&lines[1]).starts_with("  "));
    }

    #[test]
    fn test_wrapped_list_items_keep_marker_space() {
        let notes = "- Fix crash when opening very long release notes\n\n1. Faster startup on slow disks and networks";
        let texts: Vec<String> = wrap_lines(crate::markdown::render_markdown(notes), 30, 2)
            .iter()
            .map(text)
            .collect();

        assert!(texts[0].starts_with("• Fix crash"), "{:?}", texts);
        assert!(texts[1].starts_with("  "));
        let numbered = texts.iter().find(|t| t.starts_with("1.")).unwrap();
        assert!(numbered.starts_with("1. Faster startup"), "{:?}", texts);
    }
}
