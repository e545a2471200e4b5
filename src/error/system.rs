//! Failures from the local machine: the log file and its directory, and the
//! desktop facilities used for sharing (clipboard, browser launcher).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SystemError {
    #[error("Permission denied: {operation} '{}'", path.display())]
    PermissionDenied { path: PathBuf, operation: String },

    #[error("Failed to create directory '{}': {message}", path.display())]
    DirectoryCreationFailed { path: PathBuf, message: String },

    #[error("I/O error during {operation}{}: {message}", at(path))]
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// `dirs::cache_dir` had no answer, so there is nowhere to put the log.
    #[error("Could not determine cache directory")]
    NoCacheDirectory,

    #[error("{facility} unavailable: {message}")]
    DesktopUnavailable { facility: String, message: String },
}

fn at(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at '{}'", p.display()))
        .unwrap_or_default()
}

impl SystemError {
    pub fn user_message(&self) -> String {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                format!("Permission denied: cannot {} '{}'.", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory '{}'.", path.display())
            }
            SystemError::IoError { operation, path, .. } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::NoCacheDirectory => {
                "No cache directory is available; set GLOOM_LOG_FILE to choose a log path.".to_string()
            }
            SystemError::DesktopUnavailable { facility, .. } => {
                format!("The {} is not available in this session.", facility)
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoCacheDirectory => "E_SYS_NO_CACHE",
            SystemError::DesktopUnavailable { .. } => "E_SYS_DESKTOP",
        }
    }
}

/// Permission problems on a known path get their own variant; everything else
/// is a plain I/O error.
pub fn classify_io_error(err: io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    let operation = operation.to_string();
    match path {
        Some(path) if err.kind() == io::ErrorKind::PermissionDenied => {
            SystemError::PermissionDenied { path, operation }
        }
        path => SystemError::IoError {
            operation,
            path,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_on_log_file() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let classified = classify_io_error(err, Some(PathBuf::from("/var/log/gloom.log")), "open");
        assert_eq!(
            classified,
            SystemError::PermissionDenied {
                path: PathBuf::from("/var/log/gloom.log"),
                operation: "open".to_string(),
            }
        );
        assert_eq!(classified.error_code(), "E_SYS_PERM");
        assert_eq!(classified.to_string(), "Permission denied: open '/var/log/gloom.log'");
    }

    #[test]
    fn test_permission_denied_without_path_is_plain_io() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let classified = classify_io_error(err, None, "read log");
        assert!(matches!(classified, SystemError::IoError { .. }));
        assert_eq!(classified.user_message(), "Failed to read log");
        assert_eq!(classified.to_string(), "I/O error during read log: denied");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let classified = classify_io_error(err, Some(PathBuf::from("/tmp/x")), "open log file");
        assert_eq!(classified.user_message(), "Failed to open log file '/tmp/x'");
        assert_eq!(
            classified.to_string(),
            "I/O error during open log file at '/tmp/x': gone"
        );
    }

    #[test]
    fn test_desktop_unavailable_message() {
        let err = SystemError::DesktopUnavailable {
            facility: "clipboard".to_string(),
            message: "no display".to_string(),
        };
        assert_eq!(err.user_message(), "The clipboard is not available in this session.");
        assert_eq!(err.to_string(), "clipboard unavailable: no display");
    }
}
