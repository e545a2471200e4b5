//! Line rendering for each content section.

use chrono::{DateTime, Utc};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::markdown::MarkdownCache;
use crate::models::{Reaction, ReleaseAsset, ReleaseDetails};
use crate::release::format::{format_count, format_relative, format_size};
use crate::release::ContentSection;
use crate::ui::helpers::{truncate_to_width, wrap_line, wrap_lines};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_DRAFT, COLOR_HEADER, COLOR_LATEST,
    COLOR_MENTION, COLOR_PRERELEASE, COLOR_REACTED_BG, COLOR_SELECTION_BG,
};

/// Per-frame inputs shared by every section.
pub struct SectionContext<'a> {
    pub details: Option<&'a ReleaseDetails>,
    pub width: usize,
    pub now: DateTime<Utc>,
    /// Whether the asset row being rendered has focus
    pub focused: bool,
}

/// Render one section to wrapped lines. Asset rows are always exactly one
/// line so that rows map back to assets.
pub fn section_lines(
    section: &ContentSection,
    ctx: &SectionContext<'_>,
    markdown: &mut MarkdownCache,
) -> Vec<Line<'static>> {
    match section {
        ContentSection::Header => ctx
            .details
            .map(|details| wrap_line(header_line(details), ctx.width, 2))
            .unwrap_or_default(),
        ContentSection::AuthorByline {
            login, timestamp, ..
        } => wrap_line(byline(login, *timestamp, ctx.now), ctx.width, 0),
        ContentSection::Description(text) => {
            let mut lines = vec![Line::default()];
            lines.extend(wrap_lines(markdown.render(text), ctx.width, 2));
            lines.push(Line::default());
            lines
        }
        ContentSection::Reactions(reactions) => wrap_line(reaction_chips(reactions), ctx.width, 0),
        ContentSection::Divider => vec![divider(ctx.width)],
        ContentSection::ContributorsLabel => vec![Line::from(Span::styled(
            "Contributors",
            Style::new().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))],
        ContentSection::ContributorsList(contributors) => {
            wrap_line(contributor_chips(contributors), ctx.width, 0)
        }
        ContentSection::ReleaseInfo { tag_name, commit } => {
            let mut lines = vec![labelled("Tag", tag_name)];
            if let Some(commit) = commit {
                lines.push(labelled("Commit", commit));
            }
            lines
        }
        ContentSection::Asset(asset) => vec![asset_row(asset, ctx.width, ctx.focused)],
    }
}

fn badge(text: &'static str, color: ratatui::style::Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::new().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED),
    )
}

fn header_line(details: &ReleaseDetails) -> Line<'static> {
    let mut spans = vec![Span::styled(
        details.display_name().to_string(),
        Style::new().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    let badges = [
        (details.is_latest, "Latest", COLOR_LATEST),
        (details.is_prerelease, "Pre-release", COLOR_PRERELEASE),
        (details.is_draft, "Draft", COLOR_DRAFT),
    ];
    for (_, text, color) in badges.into_iter().filter(|(on, _, _)| *on) {
        spans.push(Span::raw(" "));
        spans.push(badge(text, color));
    }
    Line::from(spans)
}

fn byline(login: &str, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("@{}", login),
            Style::new().fg(COLOR_MENTION).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" released this ", Style::new().fg(COLOR_DIM)),
        Span::styled(format_relative(timestamp, now), Style::new().fg(COLOR_DIM)),
    ])
}

fn reaction_chips(reactions: &[Reaction]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, reaction) in reactions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if reaction.viewer_has_reacted {
            Style::new().bg(COLOR_REACTED_BG).fg(COLOR_HEADER)
        } else {
            Style::new().fg(COLOR_HEADER)
        };
        spans.push(Span::styled(
            format!(
                "{} {}",
                reaction.content.emoji(),
                format_count(u64::from(reaction.count))
            ),
            style,
        ));
    }
    Line::from(spans)
}

fn contributor_chips(contributors: &[(String, String)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (login, _avatar)) in contributors.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("@{}", login),
            Style::new().fg(COLOR_MENTION),
        ));
    }
    Line::from(spans)
}

fn divider(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width),
        Style::new().fg(COLOR_BORDER),
    ))
}

fn labelled(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Style::new().fg(COLOR_DIM)),
        Span::styled(value.to_string(), Style::new().fg(COLOR_HEADER)),
    ])
}

/// `⬇ name ......... 1.2 MB · 42`
fn asset_row(asset: &ReleaseAsset, width: usize, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "⬇ " };
    let meta = format!(
        "  {} · {}",
        format_size(asset.size),
        format_count(asset.download_count)
    );
    let name_width = width.saturating_sub(2 + meta.chars().count());
    let name = truncate_to_width(&asset.name, name_width);
    let padding = name_width.saturating_sub(unicode_width::UnicodeWidthStr::width(name.as_str()));

    let (name_style, row_style) = if focused {
        (
            Style::new().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            Style::new().bg(COLOR_SELECTION_BG),
        )
    } else {
        (Style::new().fg(COLOR_HEADER), Style::new())
    };

    Line::from(vec![
        Span::styled(marker, Style::new().fg(COLOR_ACCENT)),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(meta, Style::new().fg(COLOR_DIM)),
    ])
    .style(row_style)
}
