//! Identifies which release to show.

use std::fmt;

use thiserror::Error;

/// The `(owner, name, tag)` triple a release screen is opened for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTarget {
    pub owner: String,
    pub name: String,
    pub tag: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("expected <owner>/<name>, got '{0}'")]
    InvalidRepository(String),

    #[error("missing release tag")]
    MissingTag,

    #[error("not a GitHub release URL: {0}")]
    InvalidUrl(String),
}

impl ReleaseTarget {
    pub fn new(owner: impl Into<String>, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            tag: tag.into(),
        }
    }

    /// Parse command line input.
    ///
    /// Accepts either `<owner>/<name> <tag>` as two arguments, or a single
    /// release URL such as `https://github.com/acme/widget/releases/tag/v1.2.0`.
    pub fn parse(repo_or_url: &str, tag: Option<&str>) -> Result<Self, TargetParseError> {
        let trimmed = repo_or_url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Self::parse_url(trimmed);
        }

        let (owner, name) = split_repository(trimmed)
            .ok_or_else(|| TargetParseError::InvalidRepository(trimmed.to_string()))?;
        let tag = tag
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(TargetParseError::MissingTag)?;

        Ok(Self::new(owner, name, tag))
    }

    fn parse_url(url: &str) -> Result<Self, TargetParseError> {
        let invalid = || TargetParseError::InvalidUrl(url.to_string());

        let without_scheme = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let mut parts = without_scheme.trim_end_matches('/').split('/');

        let host = parts.next().ok_or_else(invalid)?;
        if !host.eq_ignore_ascii_case("github.com") && !host.eq_ignore_ascii_case("www.github.com")
        {
            return Err(invalid());
        }

        let owner = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let name = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        if parts.next() != Some("releases") || parts.next() != Some("tag") {
            return Err(invalid());
        }
        // Tags may contain slashes, e.g. `releases/tag/cli/v1.0.0`
        let tag = parts.collect::<Vec<_>>().join("/");
        if tag.is_empty() {
            return Err(TargetParseError::MissingTag);
        }

        Ok(Self::new(owner, name, tag))
    }
}

fn split_repository(input: &str) -> Option<(&str, &str)> {
    let (owner, name) = input.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((owner, name))
}

impl fmt::Display for ReleaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.name, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repository_and_tag() {
        let target = ReleaseTarget::parse("acme/widget", Some("v1.2.0")).unwrap();
        assert_eq!(target, ReleaseTarget::new("acme", "widget", "v1.2.0"));
    }

    #[test]
    fn test_parse_missing_tag() {
        assert_eq!(
            ReleaseTarget::parse("acme/widget", None),
            Err(TargetParseError::MissingTag)
        );
        assert_eq!(
            ReleaseTarget::parse("acme/widget", Some("  ")),
            Err(TargetParseError::MissingTag)
        );
    }

    #[test]
    fn test_parse_invalid_repository() {
        assert!(matches!(
            ReleaseTarget::parse("widget", Some("v1")),
            Err(TargetParseError::InvalidRepository(_))
        ));
        assert!(matches!(
            ReleaseTarget::parse("a/b/c", Some("v1")),
            Err(TargetParseError::InvalidRepository(_))
        ));
        assert!(matches!(
            ReleaseTarget::parse("/widget", Some("v1")),
            Err(TargetParseError::InvalidRepository(_))
        ));
    }

    #[test]
    fn test_parse_release_url() {
        let target = ReleaseTarget::parse(
            "https://github.com/acme/widget/releases/tag/v1.2.0",
            None,
        )
        .unwrap();
        assert_eq!(target, ReleaseTarget::new("acme", "widget", "v1.2.0"));
    }

    #[test]
    fn test_parse_release_url_with_slash_in_tag() {
        let target =
            ReleaseTarget::parse("https://github.com/acme/widget/releases/tag/cli/v2/", None)
                .unwrap();
        assert_eq!(target.tag, "cli/v2");
    }

    #[test]
    fn test_parse_non_release_url() {
        assert!(matches!(
            ReleaseTarget::parse("https://github.com/acme/widget/issues/1", None),
            Err(TargetParseError::InvalidUrl(_))
        ));
        assert!(matches!(
            ReleaseTarget::parse("https://gitlab.com/acme/widget/releases/tag/v1", None),
            Err(TargetParseError::InvalidUrl(_))
        ));
        assert_eq!(
            ReleaseTarget::parse("https://github.com/acme/widget/releases/tag/", None),
            Err(TargetParseError::MissingTag)
        );
    }

    #[test]
    fn test_display() {
        let target = ReleaseTarget::new("acme", "widget", "v1.2.0");
        assert_eq!(target.to_string(), "acme/widget@v1.2.0");
    }
}
