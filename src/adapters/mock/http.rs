//! Scripted GraphQL endpoint for tests.
//!
//! Every request goes to the same URL, so responses are a FIFO script: one
//! queued response per expected page, then an optional fallback.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request the code under test sent.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
    pub body: String,
}

impl RecordedRequest {
    /// The body as JSON, for poking at GraphQL variables.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

impl MockResponse {
    /// 200 response with a JSON body.
    pub fn json(body: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(200, body.to_string().into()))
    }

    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, body.to_string().into()))
    }
}

#[derive(Debug, Default)]
struct Script {
    queued: VecDeque<MockResponse>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// Clones share one script, so a test can keep a handle for assertions while
/// the client under test owns another.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.queue_response(MockResponse::json(json!({"data": {}})));
/// let github = GithubClient::new(http.clone(), DEFAULT_API_URL, None);
/// github.fetch_page(&target, None, 30).await?;
/// assert_eq!(http.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        // A panicking test thread must not wedge the other assertions.
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a one-shot response.
    pub fn queue_response(&self, response: MockResponse) {
        self.script().queued.push_back(response);
    }

    /// Response used once the queue is empty.
    pub fn set_fallback(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script().requests.clone()
    }

    /// Queued responses not yet consumed.
    pub fn pending_responses(&self) -> usize {
        self.script().queued.len()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let mut script = self.script();
        script.requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });

        match script.queued.pop_front().or_else(|| script.fallback.clone()) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No scripted response for {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.example.com/graphql";

    #[tokio::test]
    async fn test_records_body_and_headers() {
        let client = MockHttpClient::new();
        client.set_fallback(MockResponse::json(json!({"ok": true})));
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "bearer t".to_string());

        client.post(URL, r#"{"query":"q"}"#, &headers).await.unwrap();

        let requests = client.get_requests();
        assert_eq!(requests[0].url, URL);
        assert_eq!(requests[0].json_body(), Some(json!({"query": "q"})));
        assert_eq!(
            requests[0].headers.get("Authorization").map(String::as_str),
            Some("bearer t")
        );
    }

    #[tokio::test]
    async fn test_queue_drains_in_order_then_falls_back() {
        let client = MockHttpClient::new();
        client.queue_response(MockResponse::status(200, "first"));
        client.queue_response(MockResponse::status(502, "second"));
        client.set_fallback(MockResponse::status(404, "fallback"));
        assert_eq!(client.pending_responses(), 2);

        let first = client.post(URL, "{}", &Headers::new()).await.unwrap();
        let second = client.post(URL, "{}", &Headers::new()).await.unwrap();
        let third = client.post(URL, "{}", &Headers::new()).await.unwrap();

        assert_eq!(first.text().unwrap(), "first");
        assert_eq!(second.status, 502);
        assert_eq!(third.status, 404);
        assert_eq!(client.pending_responses(), 0);
    }

    #[tokio::test]
    async fn test_scripted_error() {
        let client = MockHttpClient::new();
        client.queue_response(MockResponse::Error(HttpError::Timeout("slow".to_string())));

        let result = client.post(URL, "{}", &Headers::new()).await;
        assert_eq!(result.unwrap_err(), HttpError::Timeout("slow".to_string()));
    }

    #[tokio::test]
    async fn test_unscripted_request_fails() {
        let client = MockHttpClient::new();
        let result = client.post(URL, "{}", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let client = MockHttpClient::new();
        let cloned = client.clone();
        client.queue_response(MockResponse::status(200, ""));

        cloned.post(URL, "{}", &Headers::new()).await.unwrap();
        assert_eq!(client.get_requests().len(), 1);
        assert_eq!(client.pending_responses(), 0);
    }
}
