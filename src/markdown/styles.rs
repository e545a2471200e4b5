//! Style constants for release-note rendering

use ratatui::style::{Color, Modifier, Style};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LINK, COLOR_MENTION};

/// Fenced and indented code blocks
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::Gray);

/// Inline `code`
pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// `#` and `##` headings
pub const STYLE_HEADING: Style = Style::new().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);

/// `###` and deeper
pub const STYLE_SUBHEADING: Style = Style::new().fg(COLOR_HEADER).add_modifier(Modifier::ITALIC);

/// Links, both `[text](url)` and bare URLs
pub const STYLE_LINK: Style = Style::new()
    .fg(COLOR_LINK)
    .add_modifier(Modifier::UNDERLINED);

/// `@user` mentions and `#123` references
pub const STYLE_MENTION: Style = Style::new().fg(COLOR_MENTION);

/// Blockquote gutter and text
pub const STYLE_QUOTE: Style = Style::new().fg(COLOR_DIM);

/// List bullets and ordinals
pub const STYLE_BULLET: Style = Style::new().fg(COLOR_DIM);

/// Horizontal rules and table borders
pub const STYLE_RULE: Style = Style::new().fg(COLOR_BORDER);

/// Table header cells
pub const STYLE_TABLE_HEADER: Style = Style::new().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);
