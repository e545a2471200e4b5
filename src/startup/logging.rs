//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log output goes to `<cache dir>/gloom/gloom.log`
//! unless a path is given explicitly.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{classify_io_error, SystemError};

/// Log file name inside the cache directory.
pub const LOG_FILE_NAME: &str = "gloom.log";

/// Default log location: `<cache dir>/gloom/gloom.log`.
pub fn default_log_path() -> Result<PathBuf, SystemError> {
    let cache = dirs::cache_dir().ok_or(SystemError::NoCacheDirectory)?;
    Ok(cache.join("gloom").join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File, SystemError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| SystemError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            message: err.to_string(),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| classify_io_error(err, Some(path.to_path_buf()), "open log file"))
}

/// Install the global subscriber.
///
/// Returns the log path on success. Logging is optional: any failure to
/// resolve or open the file leaves tracing disabled and returns `None`.
/// Only the first successful call takes effect.
pub fn init_tracing(filter: &str, log_file: Option<&Path>) -> Option<PathBuf> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path().ok()?,
    };
    let file = open_log_file(&path).ok()?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_path_ends_in_app_dir() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("gloom/gloom.log"));
        }
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("logs").join("gloom.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_appends() {
        use std::io::Write;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gloom.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_fails_under_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let err = open_log_file(&blocker.join("gloom.log")).unwrap_err();
        assert!(matches!(err, SystemError::DirectoryCreationFailed { .. }));
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gloom.log");

        let first = init_tracing("gloom=debug", Some(&path));
        let second = init_tracing("gloom=debug", Some(&path));

        // Only the first call installs a subscriber.
        assert!(second.is_none());
        if first.is_some() {
            tracing::info!("logging ready");
        }
        assert!(path.exists());
    }
}
