//! Release asset models and asset page envelopes.

use serde::{Deserialize, Serialize};

use super::release::ReleaseDetails;

/// One downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseAsset {
    /// GraphQL node id, used as the list identity key
    pub id: String,
    pub name: String,
    /// Size in bytes
    pub size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub download_count: u64,
}

/// GraphQL `pageInfo` for cursor pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// One page of release data.
///
/// The first page of a load also carries the release details; later pages
/// only carry assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePage {
    pub details: Option<ReleaseDetails>,
    pub assets: Vec<ReleaseAsset>,
    pub page_info: PageInfo,
}

impl ReleasePage {
    /// Whether another page can be requested after this one.
    pub fn has_more(&self) -> bool {
        self.page_info.has_next_page && self.page_info.end_cursor.is_some()
    }
}
