//! GitHub GraphQL release source.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::queries::{
    assets_query, release_query, AssetsOnlyNode, GraphQlRequest, GraphQlResponse, ReleaseNode,
    RepositoryData, Variables,
};
use crate::error::{classify_http_error, DataError, ErrorContext, GloomResult, NetworkError, ResultExt};
use crate::models::{ReleasePage, ReleaseTarget};
use crate::traits::{Headers, HttpClient, ReleaseSource, Response};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Fetches release pages from the GitHub GraphQL API.
#[derive(Debug, Clone)]
pub struct GithubClient<C: HttpClient> {
    http: C,
    api_url: String,
    token: Option<String>,
}

impl<C: HttpClient> GithubClient<C> {
    pub fn new(http: C, api_url: impl Into<String>, token: Option<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            api_url,
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.api_url)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("bearer {}", token));
        }
        headers
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: String,
        target: &ReleaseTarget,
        cursor: Option<&str>,
        page_size: u32,
    ) -> GloomResult<T> {
        let request = GraphQlRequest {
            query,
            variables: Variables {
                owner: &target.owner,
                name: &target.name,
                tag: &target.tag,
                first: page_size,
                after: cursor,
            },
        };
        let body = serde_json::to_string(&request)?;
        let url = self.graphql_url();

        tracing::debug!(release = %target, cursor = ?cursor, page_size, "POST {}", url);

        let response = self
            .http
            .post(&url, &body, &self.headers())
            .await
            .map_err(|err| classify_http_error(err, &url))?;

        check_status(&response)?;

        let envelope: GraphQlResponse<T> = response.json().map_err(|err| DataError::InvalidPayload {
            message: err.to_string(),
        })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            let error = DataError::GraphQl { messages };
            if error.is_not_found() {
                return Err(DataError::ReleaseNotFound {
                    target: target.to_string(),
                }
                .into());
            }
            return Err(error.into());
        }

        envelope.data.ok_or_else(|| {
            DataError::InvalidPayload {
                message: "response carried neither data nor errors".to_string(),
            }
            .into()
        })
    }
}

/// Map a non-2xx response to a network error.
fn check_status(response: &Response) -> Result<(), NetworkError> {
    if response.is_success() {
        return Ok(());
    }

    let exhausted = response.header("x-ratelimit-remaining") == Some("0");
    if matches!(response.status, 403 | 429) && exhausted {
        let reset_at = response
            .header("x-ratelimit-reset")
            .and_then(|value| value.trim().parse::<i64>().ok());
        return Err(NetworkError::RateLimited { reset_at });
    }

    let message = response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(String::from))
        .or_else(|| response.text().ok())
        .unwrap_or_default();

    Err(NetworkError::HttpStatus {
        status: response.status,
        message,
    })
}

fn not_found(target: &ReleaseTarget) -> DataError {
    DataError::ReleaseNotFound {
        target: target.to_string(),
    }
}

#[async_trait]
impl<C: HttpClient> ReleaseSource for GithubClient<C> {
    async fn fetch_page(
        &self,
        target: &ReleaseTarget,
        cursor: Option<&str>,
        page_size: u32,
    ) -> GloomResult<ReleasePage> {
        let context = || {
            ErrorContext::new("fetch_page")
                .with_target(target.to_string())
                .with_component("github")
        };

        match cursor {
            None => {
                let data: RepositoryData<ReleaseNode> = self
                    .query(release_query(), target, None, page_size)
                    .await
                    .with_context(context)?;
                let node = data
                    .repository
                    .and_then(|repo| repo.release)
                    .ok_or_else(|| not_found(target))
                    .with_context(context)?;
                let (assets, page_info) = node.release_assets.into_parts();

                tracing::info!(release = %target, assets = assets.len(), "Loaded release details");

                Ok(ReleasePage {
                    details: Some(node.details),
                    assets,
                    page_info,
                })
            }
            Some(after) => {
                let data: RepositoryData<AssetsOnlyNode> = self
                    .query(assets_query(), target, Some(after), page_size)
                    .await
                    .with_context(context)?;
                let node = data
                    .repository
                    .and_then(|repo| repo.release)
                    .ok_or_else(|| not_found(target))
                    .with_context(context)?;
                let (assets, page_info) = node.release_assets.into_parts();

                tracing::debug!(release = %target, assets = assets.len(), "Loaded asset page");

                Ok(ReleasePage {
                    details: None,
                    assets,
                    page_info,
                })
            }
        }
    }
}
