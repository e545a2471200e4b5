//! UI rendering for the release details screen
//!
//! ```text
//! ┌ title bar (3 rows) ─ back, faded two-line title, spinner, share hint
//! ├ content ─ sections rendered to lines, scrolled by `ScrollState::offset`
//! └ status line (1 row) ─ latest status message or key hints
//! ```
//!
//! Rendering is a pure function of [`ReleaseViewState`]; what it measures is
//! returned as a [`RenderLayout`] for the app to keep.

mod helpers;
mod sections;
pub mod theme;
mod title_bar;

pub use helpers::{fade, spinner_frame, wrap_line, wrap_lines, SPINNER_FRAMES};
pub use sections::{section_lines, SectionContext};
pub use title_bar::{render_title_bar, title_lines, TITLE_BAR_HEIGHT};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::markdown::MarkdownCache;
use crate::release::{compute_title_bar, ContentSection, ContentSectionBuilder};
use crate::view_state::{ReleaseViewState, RenderLayout, StatusKind};
use theme::{COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

const KEY_HINTS: &str = "q back  r refresh  s share  o open  tab assets  enter download";

/// Render the screen and report the measured layout.
pub fn render(
    frame: &mut Frame,
    view: &ReleaseViewState<'_>,
    markdown: &mut MarkdownCache,
) -> RenderLayout {
    let [title_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(TITLE_BAR_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title_state = compute_title_bar(view.details, view.is_loading, view.scroll.overlap());
    let title_visible = title_state.title.as_ref().is_some_and(|t| t.opacity > 0.0);
    let marquee_scrolling = render_title_bar(
        frame,
        title_area,
        &title_state,
        view.is_loading,
        view.tick_count,
        view.scroll.marquee_tick(view.tick_count),
    );

    let mut layout = match ContentSectionBuilder::new().build(view.details, view.assets) {
        Ok(sections) => render_content(frame, content_area, view, &sections, markdown),
        Err(err) => {
            tracing::error!(error = %err, "Could not build release sections");
            render_build_error(frame, content_area, &err.to_string());
            RenderLayout {
                viewport_height: content_area.height as usize,
                content_top: content_area.y,
                ..Default::default()
            }
        }
    };

    render_status(frame, status_area, view);

    layout.animating = view.is_loading || view.is_appending || marquee_scrolling;
    layout.title_visible = title_visible;
    layout
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    view: &ReleaseViewState<'_>,
    sections: &[ContentSection],
    markdown: &mut MarkdownCache,
) -> RenderLayout {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut asset_lines = Vec::new();
    let mut header_height = 0;

    for section in sections {
        let asset_index = matches!(section, ContentSection::Asset(_)).then_some(asset_lines.len());
        let ctx = SectionContext {
            details: view.details,
            width,
            now: view.now,
            focused: asset_index.is_some() && asset_index == view.focused_asset,
        };
        let rendered = section_lines(section, &ctx, markdown);

        if asset_index.is_some() {
            asset_lines.push(lines.len());
        }
        if matches!(section, ContentSection::Header) {
            header_height = rendered.len();
        }
        lines.extend(rendered);
    }

    lines.extend(footer_lines(view, sections.is_empty()));

    let viewport_height = area.height as usize;
    let total_lines = lines.len();
    let offset = view.scroll.offset.min(total_lines.saturating_sub(viewport_height));
    let last_visible_line = offset + viewport_height;
    let last_visible_asset = asset_lines
        .iter()
        .rposition(|&line| line < last_visible_line);

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(offset)
        .take(viewport_height)
        .collect();
    let inner = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    frame.render_widget(Paragraph::new(visible), inner);

    RenderLayout {
        total_lines,
        viewport_height,
        header_height,
        content_top: area.y,
        asset_lines,
        last_visible_asset,
        ..Default::default()
    }
}

/// Loading, error and end-of-list rows after the sections.
fn footer_lines(view: &ReleaseViewState<'_>, empty: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(error) = view.error {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!("✗ {}", error), Style::new().fg(COLOR_ERROR)),
            Span::styled("  press r to retry", Style::new().fg(COLOR_DIM)),
        ]));
    } else if view.is_loading && empty {
        lines.push(Line::from(vec![
            Span::styled(spinner_frame(view.tick_count), Style::new().fg(COLOR_ACTIVE)),
            Span::styled(" Loading release…", Style::new().fg(COLOR_DIM)),
        ]));
    } else if view.is_appending {
        lines.push(Line::from(vec![
            Span::styled(spinner_frame(view.tick_count), Style::new().fg(COLOR_ACTIVE)),
            Span::styled(" Loading more assets…", Style::new().fg(COLOR_DIM)),
        ]));
    } else if view.is_complete && view.details.is_some() && view.assets.item_count() == 0 {
        lines.push(Line::from(Span::styled(
            "No downloadable assets",
            Style::new().fg(COLOR_DIM),
        )));
    }
    lines
}

fn render_build_error(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(COLOR_ERROR))
        .title(Span::styled(
            " Could not display release ",
            Style::new().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ));
    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::default(),
        Line::from(Span::styled(
            "Press r to reload or q to go back.",
            Style::new().fg(COLOR_DIM),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(body, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &ReleaseViewState<'_>) {
    let line = match view.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => COLOR_DIM,
                StatusKind::Success => COLOR_SUCCESS,
                StatusKind::Error => COLOR_ERROR,
            };
            Line::from(Span::styled(format!(" {}", status.text), Style::new().fg(color)))
        }
        None => Line::from(Span::styled(format!(" {}", KEY_HINTS), Style::new().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
