//! Unified error type for the release viewer.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::data::DataError;
use super::network::{classify_http_error, NetworkError};
use super::system::SystemError;
use crate::traits::HttpError;

/// Unified error type.
///
/// Consolidates the domain-specific error types so the view-model can keep a
/// single error slot per load state and the status line can pick a consistent
/// message and recovery hint.
#[derive(Debug)]
pub enum GloomError {
    /// Transport and HTTP failures.
    Network(NetworkError),

    /// GraphQL errors and malformed payloads.
    Data(DataError),

    /// Filesystem and desktop facilities.
    System(SystemError),

    /// Command line and environment problems.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<GloomError>,
        context: ErrorContext,
    },
}

impl GloomError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            GloomError::Network(err) => {
                if err.is_unauthorized() {
                    ErrorCategory::Auth
                } else {
                    match err {
                        NetworkError::RateLimited { .. } => ErrorCategory::Server,
                        NetworkError::HttpStatus { status, .. } if *status >= 500 => {
                            ErrorCategory::Server
                        }
                        _ => ErrorCategory::Network,
                    }
                }
            }
            GloomError::Data(err) => {
                if err.is_not_found() {
                    ErrorCategory::User
                } else {
                    match err {
                        DataError::InvalidPayload { .. } => ErrorCategory::Client,
                        _ => ErrorCategory::Server,
                    }
                }
            }
            GloomError::System(_) => ErrorCategory::System,
            GloomError::Config(_) => ErrorCategory::Configuration,
            GloomError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            GloomError::Network(err) => err.is_retryable(),
            GloomError::Data(_) | GloomError::System(_) | GloomError::Config(_) => false,
            GloomError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            GloomError::Network(err) => err.user_message(),
            GloomError::Data(err) => err.user_message(),
            GloomError::System(err) => err.user_message(),
            GloomError::Config(err) => err.to_string(),
            GloomError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GloomError::Network(err) => err.error_code(),
            GloomError::Data(err) => err.error_code(),
            GloomError::System(err) => err.error_code(),
            GloomError::Config(err) => err.error_code(),
            GloomError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        GloomError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            GloomError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &GloomError {
        match self {
            GloomError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for GloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GloomError::Network(err) => write!(f, "{}", err),
            GloomError::Data(err) => write!(f, "{}", err),
            GloomError::System(err) => write!(f, "{}", err),
            GloomError::Config(err) => write!(f, "{}", err),
            GloomError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for GloomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GloomError::Network(err) => Some(err),
            GloomError::Data(err) => Some(err),
            GloomError::System(err) => Some(err),
            GloomError::Config(err) => Some(err),
            GloomError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for GloomError {
    fn from(err: NetworkError) -> Self {
        GloomError::Network(err)
    }
}

impl From<DataError> for GloomError {
    fn from(err: DataError) -> Self {
        GloomError::Data(err)
    }
}

impl From<SystemError> for GloomError {
    fn from(err: SystemError) -> Self {
        GloomError::System(err)
    }
}

impl From<ConfigError> for GloomError {
    fn from(err: ConfigError) -> Self {
        GloomError::Config(err)
    }
}

impl From<std::io::Error> for GloomError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        GloomError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for GloomError {
    fn from(err: serde_json::Error) -> Self {
        GloomError::Data(DataError::InvalidPayload {
            message: err.to_string(),
        })
    }
}

impl From<HttpError> for GloomError {
    fn from(err: HttpError) -> Self {
        GloomError::Network(classify_http_error(err, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_http_error_converts_to_network() {
        let err: GloomError = HttpError::Timeout("30s".to_string()).into();
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_network_categories() {
        let err: GloomError = NetworkError::ConnectionFailed {
            url: "https://api.github.com".to_string(),
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Network);

        let err: GloomError = NetworkError::HttpStatus {
            status: 401,
            message: "Bad credentials".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Auth);

        let err: GloomError = NetworkError::RateLimited { reset_at: None }.into();
        assert_eq!(err.category(), ErrorCategory::Server);

        let err: GloomError = NetworkError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_data_categories() {
        let err: GloomError = DataError::ReleaseNotFound {
            target: "acme/widget@v9".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(!err.is_retryable());

        let err: GloomError = DataError::InvalidPayload {
            message: "eof".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Client);

        let err: GloomError = DataError::GraphQl {
            messages: vec!["Something went wrong".to_string()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);
    }

    #[test]
    fn test_context_wrapping_preserves_behavior() {
        let err: GloomError = NetworkError::Timeout {
            operation: "fetch_page".to_string(),
        }
        .into();
        let wrapped = err.with_context(ErrorContext::new("refresh").with_target("acme/widget@v1"));

        assert_eq!(wrapped.context().unwrap().operation, "refresh");
        assert_eq!(wrapped.category(), ErrorCategory::Network);
        assert!(wrapped.is_retryable());
        assert_eq!(wrapped.error_code(), "E_NET_TIMEOUT");
        assert!(matches!(wrapped.inner(), GloomError::Network(_)));
        assert!(wrapped.to_string().contains("[refresh]"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: GloomError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: GloomError = json_err.into();
        assert!(matches!(err, GloomError::Data(DataError::InvalidPayload { .. })));
    }

    #[test]
    fn test_source_chain() {
        let err: GloomError = SystemError::NoCacheDirectory.into();
        assert!(err.source().is_some());
        assert_eq!(err.recovery_hint(), ErrorCategory::System.recovery_hint());
    }
}
