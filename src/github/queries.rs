//! GraphQL documents and response envelopes.

use serde::{Deserialize, Serialize};

use crate::models::{PageInfo, ReleaseAsset, ReleaseDetails};

const ASSET_FIELDS: &str = r#"
      pageInfo { hasNextPage endCursor }
      nodes { id name size contentType downloadUrl downloadCount }"#;

/// Contributors fetched with the release. Mentions are not paged, so a
/// release crediting more people shows only the first `MENTIONS_LIMIT`.
pub const MENTIONS_LIMIT: usize = 50;

/// First page: release details plus the first slice of assets.
pub fn release_query() -> String {
    format!(
        r#"query ReleaseDetails($owner: String!, $name: String!, $tag: String!, $first: Int!, $after: String) {{
  repository(owner: $owner, name: $name) {{
    release(tagName: $tag) {{
      repository {{ owner {{ login }} name }}
      name
      tagName
      createdAt
      description
      url
      isPrerelease
      isDraft
      isLatest
      author {{ login avatarUrl }}
      tagCommit {{ abbreviatedOid }}
      reactionGroups {{ content viewerHasReacted reactors {{ totalCount }} }}
      mentions(first: {}) {{ nodes {{ login avatarUrl }} }}
      releaseAssets(first: $first, after: $after) {{{}
      }}
    }}
  }}
}}"#,
        MENTIONS_LIMIT, ASSET_FIELDS
    )
}

/// Follow-up pages: assets only.
pub fn assets_query() -> String {
    format!(
        r#"query ReleaseAssets($owner: String!, $name: String!, $tag: String!, $first: Int!, $after: String) {{
  repository(owner: $owner, name: $name) {{
    release(tagName: $tag) {{
      releaseAssets(first: $first, after: $after) {{{}
      }}
    }}
  }}
}}"#,
        ASSET_FIELDS
    )
}

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: String,
    pub variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
pub struct Variables<'a> {
    pub owner: &'a str,
    pub name: &'a str,
    pub tag: &'a str,
    pub first: u32,
    pub after: Option<&'a str>,
}

/// `{ data, errors }` envelope every GraphQL response arrives in.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryData<R> {
    pub repository: Option<RepositoryNode<R>>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryNode<R> {
    pub release: Option<R>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseNode {
    #[serde(flatten)]
    pub details: ReleaseDetails,
    pub release_assets: AssetConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsOnlyNode {
    pub release_assets: AssetConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConnection {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<Option<ReleaseAsset>>,
}

impl AssetConnection {
    /// Split into non-null assets and page info.
    pub fn into_parts(self) -> (Vec<ReleaseAsset>, PageInfo) {
        (self.nodes.into_iter().flatten().collect(), self.page_info)
    }
}
