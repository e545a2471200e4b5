//! Desktop share and download adapters.

use crate::error::{GloomError, SystemError};
use crate::models::ReleaseAsset;
use crate::traits::{DownloadHandler, DownloadOutcome, ShareOutcome, ShareTarget};

/// Shares by copying to the system clipboard, falling back to the browser.
///
/// A terminal has no share sheet; the clipboard is the closest equivalent.
/// Headless sessions (no X11/Wayland, SSH) have no clipboard, so the URL is
/// opened instead when `browser_fallback` is set.
#[derive(Debug, Clone)]
pub struct SystemShare {
    browser_fallback: bool,
}

impl SystemShare {
    pub fn new() -> Self {
        Self {
            browser_fallback: true,
        }
    }

    pub fn clipboard_only() -> Self {
        Self {
            browser_fallback: false,
        }
    }

    fn copy_to_clipboard(text: &str) -> Result<(), SystemError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SystemError::DesktopUnavailable {
                facility: "clipboard".to_string(),
                message: e.to_string(),
            })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| SystemError::DesktopUnavailable {
                facility: "clipboard".to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for SystemShare {
    fn default() -> Self {
        Self::new()
    }
}

impl ShareTarget for SystemShare {
    fn share_text(&self, text: &str) -> Result<ShareOutcome, GloomError> {
        match Self::copy_to_clipboard(text) {
            Ok(()) => {
                tracing::info!("Copied release URL to clipboard");
                Ok(ShareOutcome::Copied)
            }
            Err(err) if self.browser_fallback => {
                tracing::warn!("Clipboard share failed ({}), opening browser instead", err);
                open_in_browser(text)?;
                Ok(ShareOutcome::Opened)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Open a URL with the platform's default handler.
pub fn open_in_browser(url: &str) -> Result<(), GloomError> {
    open::that(url).map_err(|e| {
        SystemError::DesktopUnavailable {
            facility: "browser launcher".to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Download handler for builds without download support.
///
/// Logs the click and reports it as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedDownloads;

impl DownloadHandler for UnsupportedDownloads {
    fn on_download_click(&self, asset: &ReleaseAsset) -> DownloadOutcome {
        tracing::info!(
            asset = %asset.name,
            url = asset.download_url.as_deref().unwrap_or("-"),
            "Download requested but not supported"
        );
        DownloadOutcome::Unsupported
    }
}
