//! Reference highlighting for release notes
//!
//! Plain text is scanned for three kinds of reference:
//! - bare URLs (`https://...`), minus trailing punctuation
//! - `@user` mentions, not preceded by a word character (so emails are skipped)
//! - `#123` issue and pull request references

use std::ops::Range;

use once_cell::sync::Lazy;
use ratatui::{style::Style, text::Span};
use regex::Regex;

use crate::markdown::styles::{STYLE_LINK, STYLE_MENTION};

static REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?P<url>https?://[^\s<>\[\]()]*[^\s<>\[\]().,;:!?'"])"#,
        r"|\B@(?P<mention>[A-Za-z0-9](?:[A-Za-z0-9-]{0,38}))",
        r"|\B#(?P<issue>\d+)\b",
    ))
    .expect("Invalid reference regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Url,
    Mention,
    Issue,
}

/// A reference found in plain text, as a byte range into that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub range: Range<usize>,
}

impl Reference {
    pub fn style(&self) -> Style {
        match self.kind {
            ReferenceKind::Url => STYLE_LINK,
            ReferenceKind::Mention | ReferenceKind::Issue => STYLE_MENTION,
        }
    }
}

/// Find URLs, mentions and issue references in plain text, in order.
pub fn detect_references(text: &str) -> Vec<Reference> {
    REFERENCE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let kind = if caps.name("url").is_some() {
                ReferenceKind::Url
            } else if caps.name("mention").is_some() {
                ReferenceKind::Mention
            } else {
                ReferenceKind::Issue
            };
            Some(Reference {
                kind,
                range: caps.get(0)?.range(),
            })
        })
        .collect()
}

/// Split text into spans with every reference highlighted.
pub(crate) fn render_text_with_references(text: &str, base_style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for reference in detect_references(text) {
        if reference.range.start > last_end {
            spans.push(Span::styled(
                text[last_end..reference.range.start].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[reference.range.clone()].to_string(),
            base_style.patch(reference.style()),
        ));
        last_end = reference.range.end;
    }

    if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }

    spans
}
