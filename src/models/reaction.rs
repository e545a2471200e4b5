//! Reaction models for GitHub GraphQL responses.

use serde::{Deserialize, Serialize};

/// The eight reaction kinds GitHub supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionContent {
    ThumbsUp,
    ThumbsDown,
    Laugh,
    Hooray,
    Confused,
    Heart,
    Rocket,
    Eyes,
}

impl ReactionContent {
    /// Emoji shown for this reaction kind.
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionContent::ThumbsUp => "👍",
            ReactionContent::ThumbsDown => "👎",
            ReactionContent::Laugh => "😄",
            ReactionContent::Hooray => "🎉",
            ReactionContent::Confused => "😕",
            ReactionContent::Heart => "❤️",
            ReactionContent::Rocket => "🚀",
            ReactionContent::Eyes => "👀",
        }
    }
}

/// Total count wrapper used by GitHub connection types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u32,
}

/// One reaction group as returned by `reactionGroups`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionGroup {
    pub content: ReactionContent,
    #[serde(default)]
    pub reactors: TotalCount,
    #[serde(default)]
    pub viewer_has_reacted: bool,
}

/// A reaction chip ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub content: ReactionContent,
    pub count: u32,
    pub viewer_has_reacted: bool,
}

impl From<&ReactionGroup> for Reaction {
    fn from(group: &ReactionGroup) -> Self {
        Self {
            content: group.content,
            count: group.reactors.total_count,
            viewer_has_reacted: group.viewer_has_reacted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_group_deserialization() {
        let json = r#"{
            "content": "THUMBS_UP",
            "reactors": {"totalCount": 12},
            "viewerHasReacted": true
        }"#;

        let group: ReactionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.content, ReactionContent::ThumbsUp);
        assert_eq!(group.reactors.total_count, 12);
        assert!(group.viewer_has_reacted);
    }

    #[test]
    fn test_reaction_group_missing_optional_fields() {
        let group: ReactionGroup = serde_json::from_str(r#"{"content": "ROCKET"}"#).unwrap();
        assert_eq!(group.content, ReactionContent::Rocket);
        assert_eq!(group.reactors.total_count, 0);
        assert!(!group.viewer_has_reacted);
    }

    #[test]
    fn test_reaction_from_group() {
        let group = ReactionGroup {
            content: ReactionContent::Heart,
            reactors: TotalCount { total_count: 3 },
            viewer_has_reacted: false,
        };
        let reaction = Reaction::from(&group);
        assert_eq!(reaction.content, ReactionContent::Heart);
        assert_eq!(reaction.count, 3);
    }

    #[test]
    fn test_every_reaction_has_emoji() {
        let all = [
            ReactionContent::ThumbsUp,
            ReactionContent::ThumbsDown,
            ReactionContent::Laugh,
            ReactionContent::Hooray,
            ReactionContent::Confused,
            ReactionContent::Heart,
            ReactionContent::Rocket,
            ReactionContent::Eyes,
        ];
        for content in all {
            assert!(!content.emoji().is_empty());
        }
    }
}
