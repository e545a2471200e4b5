//! Release detail models for GitHub GraphQL responses.
//!
//! Field names follow the GraphQL schema (`camelCase` on the wire). Every
//! field that GitHub may return as `null` is an `Option` so that the section
//! builder can decide what to show.

use serde::{Deserialize, Serialize};

use super::reaction::ReactionGroup;

/// Login of a repository owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryOwner {
    pub login: String,
}

/// Repository a release belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleaseRepository {
    pub owner: RepositoryOwner,
    pub name: String,
}

/// A GitHub account with an avatar (release author or mention).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub login: String,
    pub avatar_url: String,
}

/// Accounts mentioned in the release notes.
///
/// GitHub connections may contain `null` nodes, and `nodes` itself may be
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MentionConnection {
    #[serde(default)]
    pub nodes: Option<Vec<Option<Account>>>,
}

/// Commit the release tag points to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCommit {
    pub abbreviated_oid: String,
}

/// Full details of one release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDetails {
    pub repository: ReleaseRepository,
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    /// ISO 8601 creation timestamp, kept raw and parsed on demand.
    pub created_at: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reaction_groups: Option<Vec<ReactionGroup>>,
    #[serde(default)]
    pub mentions: Option<MentionConnection>,
    #[serde(default)]
    pub tag_commit: Option<TagCommit>,
    pub url: String,
    #[serde(default)]
    pub author: Option<Account>,
    #[serde(default)]
    pub is_prerelease: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub is_latest: bool,
}

impl ReleaseDetails {
    /// Title shown for the release: its name, or the tag when unnamed.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.tag_name)
    }

    /// Mentioned accounts with `null` entries dropped, as `(login, avatar)`
    /// pairs. `None` when GitHub returned no mention list at all.
    pub fn contributors(&self) -> Option<Vec<(String, String)>> {
        let nodes = self.mentions.as_ref()?.nodes.as_ref()?;
        Some(
            nodes
                .iter()
                .flatten()
                .map(|account| (account.login.clone(), account.avatar_url.clone()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "repository": {"owner": {"login": "acme"}, "name": "widget"},
            "name": "Widget 1.2",
            "tagName": "v1.2.0",
            "createdAt": "2024-03-01T12:00:00Z",
            "description": "Fixes **everything**",
            "reactionGroups": [],
            "mentions": {"nodes": [
                {"login": "alice", "avatarUrl": "https://a/alice"},
                null,
                {"login": "bob", "avatarUrl": "https://a/bob"}
            ]},
            "tagCommit": {"abbreviatedOid": "abc1234"},
            "url": "https://github.com/acme/widget/releases/tag/v1.2.0",
            "author": {"login": "alice", "avatarUrl": "https://a/alice"},
            "isPrerelease": true
        }"#
    }

    #[test]
    fn test_release_details_deserialization() {
        let details: ReleaseDetails = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(details.repository.owner.login, "acme");
        assert_eq!(details.repository.name, "widget");
        assert_eq!(details.tag_name, "v1.2.0");
        assert_eq!(details.tag_commit.unwrap().abbreviated_oid, "abc1234");
        assert!(details.is_prerelease);
        assert!(!details.is_latest);
    }

    #[test]
    fn test_release_details_null_fields() {
        let json = r#"{
            "repository": {"owner": {"login": "acme"}, "name": "widget"},
            "name": null,
            "tagName": "v1.2.0",
            "createdAt": "2024-03-01T12:00:00Z",
            "description": null,
            "reactionGroups": null,
            "mentions": null,
            "tagCommit": null,
            "url": "https://github.com/acme/widget/releases/tag/v1.2.0",
            "author": null
        }"#;
        let details: ReleaseDetails = serde_json::from_str(json).unwrap();
        assert!(details.name.is_none());
        assert!(details.author.is_none());
        assert!(details.contributors().is_none());
        assert_eq!(details.display_name(), "v1.2.0");
    }

    #[test]
    fn test_contributors_drop_null_nodes() {
        let details: ReleaseDetails = serde_json::from_str(sample_json()).unwrap();
        let contributors = details.contributors().unwrap();
        assert_eq!(
            contributors,
            vec![
                ("alice".to_string(), "https://a/alice".to_string()),
                ("bob".to_string(), "https://a/bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_contributors_null_nodes_list() {
        let mut details: ReleaseDetails = serde_json::from_str(sample_json()).unwrap();
        details.mentions = Some(MentionConnection { nodes: None });
        assert!(details.contributors().is_none());
    }

    #[test]
    fn test_display_name_prefers_name() {
        let details: ReleaseDetails = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(details.display_name(), "Widget 1.2");
    }
}
