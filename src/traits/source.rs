//! Release data source abstraction.

use async_trait::async_trait;

use crate::error::GloomResult;
use crate::models::{ReleasePage, ReleaseTarget};

/// Supplies pages of release data to the pager.
///
/// With `cursor == None` the page must include the release details; with a
/// cursor only the next slice of assets is required.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn fetch_page(
        &self,
        target: &ReleaseTarget,
        cursor: Option<&str>,
        page_size: u32,
    ) -> GloomResult<ReleasePage>;
}
