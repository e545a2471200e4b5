//! Unified error handling.
//!
//! - **Error Categories**: high-level classification for retry and messaging
//! - **Domain-specific Errors**: Network, Data, System and Config errors
//! - **Unified Error Type**: `GloomError` consolidates all of them
//! - **Error Context**: operation/target metadata attached for logging
//! - **Result Type Alias**: `GloomResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Auth | Missing or rejected token | No |
//! | Server | GitHub 5xx, rate limits, GraphQL errors | Yes |
//! | Client | Undecodable payloads | No |
//! | User | Unknown repository or tag | No |
//! | System | Filesystem, clipboard, browser | No |
//! | Configuration | Bad arguments or environment | No |

mod category;
mod config;
mod context;
mod data;
mod gloom_error;
mod network;
mod result;
mod system;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use data::DataError;
pub use gloom_error::GloomError;
pub use network::{classify_http_error, NetworkError};
pub use result::{GloomResult, ResultExt};
pub use system::{classify_io_error, SystemError};

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Every domain error converts into the unified type and keeps a code,
    /// a category and a user message.
    #[test]
    fn test_error_unification() {
        let errors: Vec<GloomError> = vec![
            NetworkError::Timeout {
                operation: "fetch".to_string(),
            }
            .into(),
            DataError::ReleaseNotFound {
                target: "acme/widget@v1".to_string(),
            }
            .into(),
            SystemError::NoCacheDirectory.into(),
            ConfigError::MissingArgument("tag").into(),
        ];

        let categories: Vec<ErrorCategory> = errors.iter().map(|e| e.category()).collect();
        assert_eq!(
            categories,
            vec![
                ErrorCategory::Network,
                ErrorCategory::User,
                ErrorCategory::System,
                ErrorCategory::Configuration,
            ]
        );

        for err in &errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_retry_logic() {
        let retryable: Vec<GloomError> = vec![
            NetworkError::Timeout {
                operation: "fetch".to_string(),
            }
            .into(),
            NetworkError::RateLimited { reset_at: None }.into(),
        ];
        for err in retryable {
            assert!(err.is_retryable(), "Expected {:?} to be retryable", err);
        }

        let permanent: Vec<GloomError> = vec![
            DataError::GraphQl {
                messages: vec!["bad query".to_string()],
            }
            .into(),
            ConfigError::UnknownFlag("--nope".to_string()).into(),
        ];
        for err in permanent {
            assert!(!err.is_retryable(), "Expected {:?} to not be retryable", err);
        }
    }
}
