//! Ordered content sections for the release screen.
//!
//! The section list is a pure function of the current release details and
//! the assets loaded so far. It is recomputed on every render pass.
//!
//! Assembly runs an ordered table of rules. Each rule pairs a gate with a
//! producer; the producer only runs when the gate passes, and its output is
//! appended in table order. Asset sections always come last, one per loaded
//! asset.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{ReleaseAsset, ReleaseDetails, Reaction};
use crate::paging::LazySequence;

/// One renderable unit of the release screen, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSection {
    Header,
    AuthorByline {
        login: String,
        avatar_url: String,
        timestamp: DateTime<Utc>,
    },
    Description(String),
    Reactions(Vec<Reaction>),
    Divider,
    ContributorsLabel,
    /// `(login, avatar_url)` pairs
    ContributorsList(Vec<(String, String)>),
    ReleaseInfo {
        tag_name: String,
        commit: Option<String>,
    },
    Asset(ReleaseAsset),
}

impl ContentSection {
    /// Short tag used in logs and identity keys.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentSection::Header => "header",
            ContentSection::AuthorByline { .. } => "author",
            ContentSection::Description(_) => "description",
            ContentSection::Reactions(_) => "reactions",
            ContentSection::Divider => "divider",
            ContentSection::ContributorsLabel => "contributors_label",
            ContentSection::ContributorsList(_) => "contributors",
            ContentSection::ReleaseInfo { .. } => "release_info",
            ContentSection::Asset(_) => "asset",
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, ContentSection::Divider)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("invalid release timestamp {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },
}

type Gate = fn(&ReleaseDetails) -> bool;
type Producer = fn(&ReleaseDetails) -> Result<Vec<ContentSection>, SectionError>;

/// A gated producer of detail sections.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    gate: Gate,
    produce: Producer,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

fn always(_: &ReleaseDetails) -> bool {
    true
}

fn has_author(details: &ReleaseDetails) -> bool {
    details.author.is_some()
}

fn has_description(details: &ReleaseDetails) -> bool {
    details
        .description
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty())
}

fn has_reaction_list(details: &ReleaseDetails) -> bool {
    details.reaction_groups.is_some()
}

fn has_contributors(details: &ReleaseDetails) -> bool {
    details
        .contributors()
        .is_some_and(|contributors| !contributors.is_empty())
}

fn header(_: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    Ok(vec![ContentSection::Header])
}

fn author_byline(details: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    let Some(author) = &details.author else {
        return Ok(Vec::new());
    };
    let timestamp = parse_timestamp(&details.created_at)?;
    Ok(vec![ContentSection::AuthorByline {
        login: author.login.clone(),
        avatar_url: author.avatar_url.clone(),
        timestamp,
    }])
}

fn description(details: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    Ok(details
        .description
        .iter()
        .map(|text| ContentSection::Description(text.clone()))
        .collect())
}

fn reactions(details: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    let groups = details.reaction_groups.as_deref().unwrap_or_default();
    Ok(vec![ContentSection::Reactions(
        groups.iter().map(Reaction::from).collect(),
    )])
}

fn divider(_: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    Ok(vec![ContentSection::Divider])
}

fn contributors(details: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    let list = details.contributors().unwrap_or_default();
    Ok(vec![
        ContentSection::ContributorsLabel,
        ContentSection::ContributorsList(list),
        ContentSection::Divider,
    ])
}

fn release_info(details: &ReleaseDetails) -> Result<Vec<ContentSection>, SectionError> {
    Ok(vec![
        ContentSection::ReleaseInfo {
            tag_name: details.tag_name.clone(),
            commit: details
                .tag_commit
                .as_ref()
                .map(|commit| commit.abbreviated_oid.clone()),
        },
        ContentSection::Divider,
    ])
}

/// Parse a GitHub `DateTime` scalar (RFC 3339).
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SectionError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| SectionError::InvalidTimestamp {
            value: value.to_string(),
            message: err.to_string(),
        })
}

/// Detail rules in display order.
pub const DETAIL_RULES: [Rule; 7] = [
    Rule {
        name: "header",
        gate: always,
        produce: header,
    },
    Rule {
        name: "author",
        gate: has_author,
        produce: author_byline,
    },
    Rule {
        name: "description",
        gate: has_description,
        produce: description,
    },
    // Present even when the list is empty.
    Rule {
        name: "reactions",
        gate: has_reaction_list,
        produce: reactions,
    },
    Rule {
        name: "divider",
        gate: always,
        produce: divider,
    },
    Rule {
        name: "contributors",
        gate: has_contributors,
        produce: contributors,
    },
    Rule {
        name: "release_info",
        gate: always,
        produce: release_info,
    },
];

/// Assembles the section list from a details snapshot and loaded assets.
#[derive(Debug, Clone)]
pub struct ContentSectionBuilder {
    rules: Vec<Rule>,
}

impl Default for ContentSectionBuilder {
    fn default() -> Self {
        Self {
            rules: DETAIL_RULES.to_vec(),
        }
    }
}

impl ContentSectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Build the ordered section list.
    ///
    /// Without details only asset sections are produced. Asset indices with
    /// no loaded item are skipped.
    ///
    /// # Errors
    ///
    /// Fails with [`SectionError::InvalidTimestamp`] when an author is present
    /// and `created_at` does not parse.
    pub fn build<S>(
        &self,
        details: Option<&ReleaseDetails>,
        assets: &S,
    ) -> Result<Vec<ContentSection>, SectionError>
    where
        S: LazySequence<ReleaseAsset> + ?Sized,
    {
        let mut sections = Vec::with_capacity(self.rules.len() + 2 + assets.item_count());

        if let Some(details) = details {
            for rule in &self.rules {
                if (rule.gate)(details) {
                    sections.extend((rule.produce)(details)?);
                }
            }
        }

        sections.extend(
            (0..assets.item_count())
                .filter_map(|index| assets.get(index))
                .cloned()
                .map(ContentSection::Asset),
        );

        Ok(sections)
    }
}

/// Build with the default rule table.
pub fn build_sections<S>(
    details: Option<&ReleaseDetails>,
    assets: &S,
) -> Result<Vec<ContentSection>, SectionError>
where
    S: LazySequence<ReleaseAsset> + ?Sized,
{
    ContentSectionBuilder::default().build(details, assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Account, MentionConnection, ReactionContent, ReactionGroup, ReleaseRepository,
        RepositoryOwner, TagCommit, TotalCount,
    };

    fn details() -> ReleaseDetails {
        ReleaseDetails {
            repository: ReleaseRepository {
                owner: RepositoryOwner {
                    login: "acme".to_string(),
                },
                name: "widget".to_string(),
            },
            name: None,
            tag_name: "v1.2.0".to_string(),
            created_at: "2024-03-01T12:00:00Z".to_string(),
            description: None,
            reaction_groups: None,
            mentions: None,
            tag_commit: None,
            url: "https://github.com/acme/widget/releases/tag/v1.2.0".to_string(),
            author: None,
            is_prerelease: false,
            is_draft: false,
            is_latest: false,
        }
    }

    fn account(login: &str) -> Account {
        Account {
            login: login.to_string(),
            avatar_url: format!("https://avatars/{}", login),
        }
    }

    fn asset(id: &str, name: &str, size: u64) -> ReleaseAsset {
        ReleaseAsset {
            id: id.to_string(),
            name: name.to_string(),
            size,
            content_type: None,
            download_url: None,
            download_count: 0,
        }
    }

    fn kinds(sections: &[ContentSection]) -> Vec<&'static str> {
        sections.iter().map(ContentSection::kind).collect()
    }

    fn dividers(sections: &[ContentSection]) -> usize {
        sections.iter().filter(|s| s.is_divider()).count()
    }

    const NO_ASSETS: &[ReleaseAsset] = &[];

    #[test]
    fn test_no_details_emits_only_assets() {
        let assets = vec![asset("1", "a.zip", 1), asset("2", "b.zip", 2)];
        let sections = build_sections(None, &assets).unwrap();
        assert_eq!(kinds(&sections), vec!["asset", "asset"]);

        assert!(build_sections(None, NO_ASSETS).unwrap().is_empty());
    }

    #[test]
    fn test_minimal_details_layout() {
        let sections = build_sections(Some(&details()), NO_ASSETS).unwrap();
        assert_eq!(
            kinds(&sections),
            vec!["header", "divider", "release_info", "divider"]
        );
        assert_eq!(dividers(&sections), 2);
    }

    #[test]
    fn test_full_layout_order() {
        let mut details = details();
        details.author = Some(account("octo"));
        details.description = Some("Fixes".to_string());
        details.reaction_groups = Some(vec![ReactionGroup {
            content: ReactionContent::Rocket,
            reactors: TotalCount { total_count: 4 },
            viewer_has_reacted: false,
        }]);
        details.mentions = Some(MentionConnection {
            nodes: Some(vec![Some(account("alice")), None, Some(account("bob"))]),
        });
        details.tag_commit = Some(TagCommit {
            abbreviated_oid: "abc1234".to_string(),
        });

        let assets = vec![asset("1", "a.zip", 10)];
        let sections = build_sections(Some(&details), &assets).unwrap();

        assert_eq!(
            kinds(&sections),
            vec![
                "header",
                "author",
                "description",
                "reactions",
                "divider",
                "contributors_label",
                "contributors",
                "divider",
                "release_info",
                "divider",
                "asset",
            ]
        );
        assert_eq!(dividers(&sections), 3);
        assert_eq!(
            sections[6],
            ContentSection::ContributorsList(vec![
                ("alice".to_string(), "https://avatars/alice".to_string()),
                ("bob".to_string(), "https://avatars/bob".to_string()),
            ])
        );
        assert_eq!(
            sections[8],
            ContentSection::ReleaseInfo {
                tag_name: "v1.2.0".to_string(),
                commit: Some("abc1234".to_string()),
            }
        );
        match &sections[1] {
            ContentSection::AuthorByline {
                login, timestamp, ..
            } => {
                assert_eq!(login, "octo");
                assert_eq!(timestamp.to_rfc3339(), "2024-03-01T12:00:00+00:00");
            }
            other => panic!("expected byline, got {:?}", other),
        }
    }

    #[test]
    fn test_no_author_no_byline() {
        let mut details = details();
        details.created_at = "garbage".to_string();
        let sections = build_sections(Some(&details), NO_ASSETS).unwrap();
        assert!(!kinds(&sections).contains(&"author"));
    }

    #[test]
    fn test_invalid_timestamp_with_author_fails() {
        let mut details = details();
        details.author = Some(account("octo"));
        details.created_at = "yesterday".to_string();
        let err = build_sections(Some(&details), NO_ASSETS).unwrap_err();
        assert!(matches!(err, SectionError::InvalidTimestamp { ref value, .. } if value == "yesterday"));
    }

    #[test]
    fn test_blank_description_skipped() {
        for text in ["", "   ", "\n\t "] {
            let mut details = details();
            details.description = Some(text.to_string());
            let sections = build_sections(Some(&details), NO_ASSETS).unwrap();
            assert!(!kinds(&sections).contains(&"description"), "{:?}", text);
        }

        let mut details = details();
        details.description = Some(" x ".to_string());
        let sections = build_sections(Some(&details), NO_ASSETS).unwrap();
        assert_eq!(
            sections
                .iter()
                .filter(|s| matches!(s, ContentSection::Description(t) if t == " x "))
                .count(),
            1
        );
    }

    #[test]
    fn test_empty_reaction_list_still_emitted() {
        let mut details = details();
        details.reaction_groups = Some(Vec::new());
        let sections = build_sections(Some(&details), NO_ASSETS).unwrap();
        assert!(sections.contains(&ContentSection::Reactions(Vec::new())));
    }

    #[test]
    fn test_empty_mentions_skip_contributor_block() {
        let mut details = details();
        details.mentions = Some(MentionConnection {
            nodes: Some(Vec::new()),
        });
        let sections = build_sections(Some(&details), NO_ASSETS).unwrap();
        assert!(!kinds(&sections).contains(&"contributors_label"));
        assert!(!kinds(&sections).contains(&"contributors"));
        assert_eq!(dividers(&sections), 2);

        details.mentions = Some(MentionConnection {
            nodes: Some(vec![None, None]),
        });
        let sections = build_sections(Some(&details), NO_ASSETS).unwrap();
        assert_eq!(dividers(&sections), 2);
    }

    #[test]
    fn test_three_assets_in_load_order() {
        let assets = vec![
            asset("1", "widget-linux.tar.gz", 1_048_576),
            asset("2", "widget-macos.zip", 2_000),
            asset("3", "checksums.txt", 64),
        ];
        let sections = build_sections(Some(&details()), &assets).unwrap();
        let loaded: Vec<(&str, u64)> = sections
            .iter()
            .filter_map(|s| match s {
                ContentSection::Asset(a) => Some((a.name.as_str(), a.size)),
                _ => None,
            })
            .collect();
        assert_eq!(
            loaded,
            vec![
                ("widget-linux.tar.gz", 1_048_576),
                ("widget-macos.zip", 2_000),
                ("checksums.txt", 64),
            ]
        );
    }

    #[test]
    fn test_unloaded_indices_skipped() {
        struct Sparse(Vec<Option<ReleaseAsset>>);

        impl LazySequence<ReleaseAsset> for Sparse {
            fn item_count(&self) -> usize {
                self.0.len()
            }
            fn get(&self, index: usize) -> Option<&ReleaseAsset> {
                self.0.get(index).and_then(Option::as_ref)
            }
        }

        let sparse = Sparse(vec![Some(asset("1", "a", 1)), None, Some(asset("3", "c", 3))]);
        let sections = build_sections(None, &sparse).unwrap();
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<&str> = ContentSectionBuilder::new()
            .rules()
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "header",
                "author",
                "description",
                "reactions",
                "divider",
                "contributors",
                "release_info"
            ]
        );
    }
}
