//! Errors about the data GitHub sent back.

use std::fmt;

/// Payload-level error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The GraphQL response carried an `errors` array.
    GraphQl { messages: Vec<String> },

    /// The repository or the release tag does not exist.
    ReleaseNotFound { target: String },

    /// The response body could not be decoded.
    InvalidPayload { message: String },
}

impl DataError {
    /// Whether the failure was caused by the requested release not existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            DataError::ReleaseNotFound { .. } => true,
            // GitHub reports unknown repositories as a NOT_FOUND GraphQL error
            DataError::GraphQl { messages } => messages
                .iter()
                .any(|m| m.starts_with("Could not resolve to a Repository")),
            DataError::InvalidPayload { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            DataError::GraphQl { messages } => match messages.first() {
                Some(first) if messages.len() > 1 => {
                    format!("GitHub reported an error: {} (+{} more)", first, messages.len() - 1)
                }
                Some(first) => format!("GitHub reported an error: {}", first),
                None => "GitHub reported an unknown error.".to_string(),
            },
            DataError::ReleaseNotFound { target } => format!("Release {} was not found.", target),
            DataError::InvalidPayload { .. } => {
                "Received a response from GitHub that could not be read.".to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DataError::GraphQl { .. } => "E_DATA_GRAPHQL",
            DataError::ReleaseNotFound { .. } => "E_DATA_NOT_FOUND",
            DataError::InvalidPayload { .. } => "E_DATA_PAYLOAD",
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::GraphQl { messages } => write!(f, "GraphQL error: {}", messages.join("; ")),
            DataError::ReleaseNotFound { target } => write!(f, "Release not found: {}", target),
            DataError::InvalidPayload { message } => write!(f, "Invalid payload: {}", message),
        }
    }
}

impl std::error::Error for DataError {}
