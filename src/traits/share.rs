//! Share and download collaborators.
//!
//! Both are fire-and-forget from the screen's point of view: the outcome is
//! only used for the status line.

use crate::error::GloomError;
use crate::models::ReleaseAsset;

/// How a share request was fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// URL placed on the system clipboard.
    Copied,
    /// URL handed to the default browser.
    Opened,
}

/// Hands a URL to the platform.
pub trait ShareTarget: Send + Sync {
    fn share_text(&self, text: &str) -> Result<ShareOutcome, GloomError>;
}

/// Result of a download click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Started { file_name: String },
    Unsupported,
}

/// Receives download clicks for release assets.
pub trait DownloadHandler: Send + Sync {
    fn on_download_click(&self, asset: &ReleaseAsset) -> DownloadOutcome;
}
