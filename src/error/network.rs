//! Errors raised while talking to the GitHub API: transport failures, HTTP
//! status codes and rate limiting.

use thiserror::Error;

use crate::traits::HttpError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("{operation} timed out")]
    Timeout { operation: String },

    /// Non-2xx response. `message` is GitHub's `message` field or the raw body.
    #[error("HTTP {status} error: {message}")]
    HttpStatus { status: u16, message: String },

    /// `reset_at` is a unix timestamp.
    #[error("Rate limited{}", reset_at.map(|r| format!(" until {}", r)).unwrap_or_default())]
    RateLimited { reset_at: Option<i64> },

    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. }
            | NetworkError::Timeout { .. }
            | NetworkError::RateLimited { .. } => true,
            NetworkError::HttpStatus { status, .. } => matches!(status, 408 | 429 | 500..=599),
            NetworkError::Other { .. } => false,
        }
    }

    /// Whether the GitHub token is missing or was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status: 401, .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach GitHub. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { operation } => {
                format!("{} timed out. GitHub may be slow or unreachable.", operation)
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                401 => "GitHub rejected the request. Is GITHUB_TOKEN set and valid?".to_string(),
                403 => "Access denied by GitHub.".to_string(),
                404 => "The GitHub API endpoint was not found.".to_string(),
                500..=599 => "GitHub is experiencing issues. Please try again later.".to_string(),
                _ => format!("GitHub returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited { reset_at } => {
                let reset = reset_at.and_then(|reset| chrono::DateTime::from_timestamp(reset, 0));
                match reset {
                    Some(at) => format!(
                        "GitHub rate limit exceeded. Resets at {}.",
                        at.format("%H:%M UTC")
                    ),
                    None => "GitHub rate limit exceeded.".to_string(),
                }
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited { .. } => "E_NET_RATE",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

/// Classify a transport-level [`HttpError`] for a request to `url`.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) | HttpError::InvalidUrl(message) => {
            NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            }
        }
        HttpError::Timeout(_) => NetworkError::Timeout {
            operation: "GitHub request".to_string(),
        },
        HttpError::Body(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_retryable() {
        let err = NetworkError::ConnectionFailed {
            url: "https://api.github.com/graphql".to_string(),
            message: "Connection refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_http_status_retry_policy() {
        let server = NetworkError::HttpStatus {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(server.is_retryable());

        let unauthorized = NetworkError::HttpStatus {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert!(!unauthorized.is_retryable());
        assert!(unauthorized.is_unauthorized());
        assert!(unauthorized.user_message().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_rate_limited_message_includes_reset() {
        let err = NetworkError::RateLimited {
            reset_at: Some(1_700_000_000),
        };
        assert!(err.is_retryable());
        assert!(err.user_message().contains("Resets at"));

        let err = NetworkError::RateLimited { reset_at: None };
        assert_eq!(err.user_message(), "GitHub rate limit exceeded.");
    }

    #[test]
    fn test_display() {
        let err = NetworkError::RateLimited {
            reset_at: Some(1_700_000_000),
        };
        assert_eq!(err.to_string(), "Rate limited until 1700000000");
        assert_eq!(
            NetworkError::RateLimited { reset_at: None }.to_string(),
            "Rate limited"
        );
        assert!(!NetworkError::Other {
            message: "reset".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_classify_http_error() {
        let url = "https://api.github.com/graphql";
        assert!(matches!(
            classify_http_error(HttpError::ConnectionFailed("refused".into()), url),
            NetworkError::ConnectionFailed { .. }
        ));
        assert!(matches!(
            classify_http_error(HttpError::Timeout("30s".into()), url),
            NetworkError::Timeout { .. }
        ));
        assert_eq!(
            classify_http_error(HttpError::InvalidUrl("no scheme".into()), url),
            NetworkError::ConnectionFailed {
                url: url.to_string(),
                message: "no scheme".into()
            }
        );
        assert!(matches!(
            classify_http_error(HttpError::Body("broken pipe".into()), url),
            NetworkError::Other { .. }
        ));
    }
}
