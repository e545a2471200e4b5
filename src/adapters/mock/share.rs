//! Recording share and download doubles.

use std::sync::{Arc, Mutex};

use crate::error::{GloomError, SystemError};
use crate::models::ReleaseAsset;
use crate::traits::{DownloadHandler, DownloadOutcome, ShareOutcome, ShareTarget};

/// Share target that records every shared text.
#[derive(Debug, Clone, Default)]
pub struct RecordingShare {
    shared: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// A share target whose every call fails as if no clipboard existed.
    pub fn failing() -> Self {
        Self {
            shared: Arc::default(),
            fail: true,
        }
    }

    pub fn shared(&self) -> Vec<String> {
        self.shared
            .lock()
            .map(|shared| shared.clone())
            .unwrap_or_default()
    }
}

impl ShareTarget for RecordingShare {
    fn share_text(&self, text: &str) -> Result<ShareOutcome, GloomError> {
        if self.fail {
            return Err(SystemError::DesktopUnavailable {
                facility: "clipboard".to_string(),
                message: "no display".to_string(),
            }
            .into());
        }
        if let Ok(mut shared) = self.shared.lock() {
            shared.push(text.to_string());
        }
        Ok(ShareOutcome::Copied)
    }
}

/// Download handler that records clicked asset names.
#[derive(Debug, Clone, Default)]
pub struct RecordingDownloads {
    clicked: Arc<Mutex<Vec<String>>>,
}

impl RecordingDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicked(&self) -> Vec<String> {
        self.clicked
            .lock()
            .map(|clicked| clicked.clone())
            .unwrap_or_default()
    }
}

impl DownloadHandler for RecordingDownloads {
    fn on_download_click(&self, asset: &ReleaseAsset) -> DownloadOutcome {
        if let Ok(mut clicked) = self.clicked.lock() {
            clicked.push(asset.name.clone());
        }
        DownloadOutcome::Started {
            file_name: asset.name.clone(),
        }
    }
}
