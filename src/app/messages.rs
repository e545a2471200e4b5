//! AppMessage enum for async communication within the application.

use crate::error::GloomResult;
use crate::models::ReleasePage;

/// Messages received from background tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A page fetch finished.
    ///
    /// `generation` is the pager generation the request was issued for;
    /// results from an older generation are discarded on arrival.
    PageLoaded {
        generation: u64,
        append: bool,
        result: GloomResult<ReleasePage>,
    },
}

impl AppMessage {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AppMessage::PageLoaded { append: false, .. } => "PageLoaded(refresh)",
            AppMessage::PageLoaded { append: true, .. } => "PageLoaded(append)",
        }
    }
}
