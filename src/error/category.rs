//! Coarse error buckets.
//!
//! Categories drive the retry decision on the release screen and pick the
//! recovery hint shown in the status line.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Generally transient.
    Network,

    /// Missing or rejected GitHub token.
    Auth,

    /// GitHub-side failures (HTTP 5xx, rate limits).
    Server,

    /// Payloads we could not make sense of. Indicates a bug or schema drift.
    Client,

    /// The user asked for something that does not exist.
    User,

    /// Filesystem, clipboard and other OS facilities.
    System,

    /// Bad command line or environment configuration.
    Configuration,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 7] = [
        ErrorCategory::Network,
        ErrorCategory::Auth,
        ErrorCategory::Server,
        ErrorCategory::Client,
        ErrorCategory::User,
        ErrorCategory::System,
        ErrorCategory::Configuration,
    ];

    /// Whether pressing r has a chance of helping.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Label used in the `category` tracing field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Second line of the error banner.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and press r to retry",
            ErrorCategory::Auth => "Set GITHUB_TOKEN to a valid personal access token",
            ErrorCategory::Server => "GitHub may be having issues. Press r to retry later",
            ErrorCategory::Client => "This may be a bug. Please report it if it persists",
            ErrorCategory::User => "Check the repository name and release tag",
            ErrorCategory::System => "Check file permissions and your desktop environment",
            ErrorCategory::Configuration => "Run gloom --help for usage",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_network_and_server_retry() {
        let retryable: Vec<_> = ErrorCategory::ALL
            .iter()
            .filter(|c| c.is_retryable())
            .copied()
            .collect();
        assert_eq!(retryable, vec![ErrorCategory::Network, ErrorCategory::Server]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn test_retryable_hints_mention_retry_key() {
        for category in ErrorCategory::ALL {
            let hint = category.recovery_hint();
            assert!(!hint.is_empty());
            assert_eq!(category.is_retryable(), hint.contains("press r") || hint.contains("Press r"));
        }
    }
}
