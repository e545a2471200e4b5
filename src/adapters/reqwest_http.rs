//! The production [`HttpClient`]: a single reqwest client carrying the gloom
//! user agent and a request timeout.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// GitHub rejects requests without a user agent.
pub const USER_AGENT: &str = concat!("gloom/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("Falling back to default reqwest client: {}", err);
                reqwest::Client::new()
            });
        Self { client }
    }

    fn send_error(err: reqwest::Error) -> HttpError {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else {
            HttpError::Other(message)
        }
    }

    /// Headers that are not valid UTF-8 are dropped.
    fn collect_headers(map: &HeaderMap) -> Headers {
        map.iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.to_string(), value.to_string()))
            })
            .collect()
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.post(url).body(body.to_string()), |req, (k, v)| {
                req.header(k, v)
            });

        let response = request.send().await.map_err(Self::send_error)?;
        let status = response.status().as_u16();
        let response_headers = Self::collect_headers(response.headers());
        let bytes = response
            .bytes()
            .await
            .map_err(|err| match Self::send_error(err) {
                HttpError::Timeout(message) => HttpError::Timeout(message),
                other => HttpError::Body(other.to_string()),
            })?;

        Ok(Response::with_headers(status, response_headers, bytes))
    }
}
