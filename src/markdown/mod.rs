//! Release-note markdown rendering for the terminal
//!
//! Converts GitHub-flavoured markdown to styled ratatui Lines. Handles
//! headings, nested lists (bulleted, numbered and task lists), blockquotes,
//! code, tables, rules, links, `@mentions` and `#123` references.
//!
//! Line breaks inside a paragraph are kept, matching how GitHub displays
//! release descriptions. Lines are not wrapped here; the UI wraps them to the
//! viewport width.
//!
//! `MarkdownCache` memoises the output keyed by a content hash, since the
//! description is re-rendered on every frame.

mod cache;
mod links;
mod styles;

pub use cache::MarkdownCache;
pub use links::{detect_references, Reference, ReferenceKind};

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use links::render_text_with_references;
use styles::{
    STYLE_BULLET, STYLE_CODE_BLOCK, STYLE_HEADING, STYLE_INLINE_CODE, STYLE_LINK, STYLE_QUOTE,
    STYLE_RULE, STYLE_SUBHEADING, STYLE_TABLE_HEADER,
};

/// Maximum number of entries in the markdown cache before eviction
pub const MARKDOWN_CACHE_MAX_ENTRIES: usize = 64;

/// Width of the horizontal rule drawn for `---`
const RULE_WIDTH: usize = 24;

/// Render markdown text to styled Lines.
///
/// Always returns at least one line.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(text, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// One open list: `None` for bullets, `Some(n)` for the next ordinal.
type ListKind = Option<u64>;

#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

struct Renderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    lists: Vec<ListKind>,
    quote_depth: usize,
    in_code_block: bool,
    in_link: bool,
    table: Option<TableState>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            spans: Vec::new(),
            style_stack: vec![Style::default()],
            lists: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
            in_link: false,
            table: None,
        }
    }
}

impl Renderer {
    fn style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.style());
        self.style_stack.push(next);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    /// Prefix for a fresh line inside blockquotes.
    fn quote_prefix(&self) -> Option<Span<'static>> {
        (self.quote_depth > 0).then(|| Span::styled("│ ".repeat(self.quote_depth), STYLE_QUOTE))
    }

    fn flush(&mut self) {
        if !self.spans.is_empty() {
            let mut spans = Vec::with_capacity(self.spans.len() + 1);
            spans.extend(self.quote_prefix());
            spans.append(&mut self.spans);
            self.lines.push(Line::from(spans));
        }
    }

    /// Blank separator line, never doubled and never leading.
    fn blank(&mut self) {
        self.flush();
        let last_blank = self
            .lines
            .last()
            .map(|line| line.spans.iter().all(|s| s.content.trim().is_empty()));
        if last_blank == Some(false) {
            self.lines.push(Line::from(""));
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(table) = &mut self.table {
                    table.cell.push_str(&code);
                } else {
                    self.spans
                        .push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(table) = &mut self.table {
                    table.cell.push(' ');
                } else {
                    self.flush();
                }
            }
            Event::Rule => {
                self.blank();
                self.lines
                    .push(Line::from(Span::styled("─".repeat(RULE_WIDTH), STYLE_RULE)));
                self.lines.push(Line::from(""));
            }
            Event::TaskListMarker(checked) => {
                // Replaces the bullet pushed by the list item.
                self.spans.pop();
                let marker = if checked { "[x] " } else { "[ ] " };
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                self.spans
                    .push(Span::styled(format!("{}{}", indent, marker), STYLE_BULLET));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                // Comments such as `<!-- Release notes generated -->` are noise.
                if !html.trim_start().starts_with("<!--") {
                    self.text(&html);
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.blank();
                let style = match level {
                    HeadingLevel::H1 | HeadingLevel::H2 => STYLE_HEADING,
                    _ => STYLE_SUBHEADING,
                };
                self.style_stack.push(style);
            }
            Tag::Paragraph => {
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            Tag::BlockQuote { .. } => {
                self.blank();
                self.quote_depth += 1;
                self.push_style(|s| s.patch(STYLE_QUOTE));
            }
            Tag::CodeBlock(kind) => {
                self.blank();
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        self.lines
                            .push(Line::from(Span::styled(lang.to_string(), STYLE_RULE)));
                    }
                }
                self.in_code_block = true;
                self.style_stack.push(STYLE_CODE_BLOCK);
            }
            Tag::List(first) => {
                if self.lists.is_empty() {
                    self.blank();
                } else {
                    self.flush();
                }
                self.lists.push(first);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let indent = "  ".repeat(depth);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}{}. ", indent, n);
                        *n += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                self.spans.push(Span::styled(marker, STYLE_BULLET));
            }
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { .. } => {
                self.in_link = true;
                self.push_style(|s| s.patch(STYLE_LINK));
            }
            Tag::Image { .. } => {
                self.in_link = true;
                self.push_style(|s| s.patch(STYLE_LINK));
                self.spans.push(Span::styled("[image: ", STYLE_BULLET));
            }
            Tag::Table(_) => {
                self.blank();
                self.table = Some(TableState::default());
            }
            Tag::TableHead | Tag::TableRow => {
                if let Some(table) = &mut self.table {
                    table.row.clear();
                }
            }
            Tag::TableCell => {
                if let Some(table) = &mut self.table {
                    table.cell.clear();
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush();
                self.pop_style();
            }
            TagEnd::Paragraph => self.flush(),
            TagEnd::BlockQuote { .. } => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.pop_style();
            }
            TagEnd::CodeBlock => {
                self.flush();
                self.in_code_block = false;
                self.pop_style();
            }
            TagEnd::List(_) => {
                self.flush();
                self.lists.pop();
            }
            TagEnd::Item => self.flush(),
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.in_link = false;
                self.pop_style();
            }
            TagEnd::Image => {
                self.in_link = false;
                self.pop_style();
                self.spans.push(Span::styled("]", STYLE_BULLET));
            }
            TagEnd::TableCell => {
                if let Some(table) = &mut self.table {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(table) = &mut self.table {
                    if !table.row.is_empty() {
                        let row = std::mem::take(&mut table.row);
                        table.rows.push(row);
                    }
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    render_table_to_lines(&table.rows, &mut self.lines);
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(table) = &mut self.table {
            table.cell.push_str(text);
            return;
        }
        let style = self.style();
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                if self.in_code_block {
                    self.lines.push(Line::from(std::mem::take(&mut self.spans)));
                } else {
                    self.flush();
                }
            }
            if !part.is_empty() {
                if self.in_code_block || self.in_link {
                    self.spans.push(Span::styled(part.to_string(), style));
                } else {
                    self.spans.extend(render_text_with_references(part, style));
                }
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();

        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().all(|s| s.content.trim().is_empty()))
        {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }

        self.lines
    }
}

/// Render a table to styled Lines with box-drawing borders.
fn render_table_to_lines(table_rows: &[Vec<String>], lines: &mut Vec<Line<'static>>) {
    let num_cols = table_rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if num_cols == 0 {
        return;
    }

    let mut col_widths: Vec<usize> = vec![3; num_cols];
    for row in table_rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(unicode_width::UnicodeWidthStr::width(cell.trim()));
        }
    }

    lines.push(Line::from(Span::styled(
        build_table_border(&col_widths, '┌', '┬', '┐'),
        STYLE_RULE,
    )));

    for (row_idx, row) in table_rows.iter().enumerate() {
        let style = if row_idx == 0 {
            STYLE_TABLE_HEADER
        } else {
            Style::default()
        };
        let mut spans: Vec<Span<'static>> = vec![Span::styled("│", STYLE_RULE)];
        for (col_idx, width) in col_widths.iter().enumerate() {
            let content = row.get(col_idx).map(|c| c.trim()).unwrap_or("");
            let pad = width.saturating_sub(unicode_width::UnicodeWidthStr::width(content));
            spans.push(Span::styled(
                format!(" {}{} ", content, " ".repeat(pad)),
                style,
            ));
            spans.push(Span::styled("│", STYLE_RULE));
        }
        lines.push(Line::from(spans));

        if row_idx == 0 && table_rows.len() > 1 {
            lines.push(Line::from(Span::styled(
                build_table_border(&col_widths, '├', '┼', '┤'),
                STYLE_RULE,
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        build_table_border(&col_widths, '└', '┴', '┘'),
        STYLE_RULE,
    )));
}

/// Build a table border line with the given corner and junction characters.
fn build_table_border(col_widths: &[usize], left: char, middle: char, right: char) -> String {
    let inner: Vec<String> = col_widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, inner.join(&middle.to_string()), right)
}
