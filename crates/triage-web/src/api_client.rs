//! HTTP client for the triage backend API

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::de::DeserializeOwned;
use triage_core::{Error, Result, Stats, TicketList};

/// Client for the triage backend's JSON endpoints.
///
/// The base URL is injected explicitly so the client can be pointed at a
/// mock endpoint in tests; there is no ambient global. Every request is sent
/// with caching disabled because the dashboard must reflect the latest
/// triage run, never a stale intermediary copy. No timeout is configured: a
/// hung upstream blocks that render, which is accepted for an internal
/// read-only tool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the aggregate statistics from `GET /stats`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not the expected JSON shape.
    pub async fn get_stats(&self) -> Result<Stats> {
        self.fetch_json("/stats").await
    }

    /// Fetch the triaged ticket list from `GET /tickets`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not the expected JSON shape.
    pub async fn get_tickets(&self) -> Result<TicketList> {
        self.fetch_json("/tickets").await
    }

    /// Issue a GET against `{base}{path}` and decode the JSON body.
    ///
    /// Beyond the JSON decode there is no schema validation; the target type
    /// is the contract.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| Error::backend(path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request(status.as_u16(), path));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::decode(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn stats_body() -> serde_json::Value {
        serde_json::json!({
            "total": 10,
            "needs_review": 3,
            "categories": [
                {"category": "billing", "n": 5},
                {"category": "bug", "n": 3}
            ]
        })
    }

    #[tokio::test]
    async fn fetches_and_decodes_stats() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let stats = client.get_stats().await.unwrap();

        assert_eq!(stats.total, 10);
        assert_eq!(stats.needs_review, 3);
        assert_eq!(stats.categories.len(), 2);
    }

    #[tokio::test]
    async fn sends_no_cache_headers_on_every_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tickets"))
            .and(header("cache-control", "no-cache"))
            .and(header("pragma", "no-cache"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let tickets = client.get_tickets().await.unwrap();
        assert!(tickets.items.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let error = client.get_stats().await.unwrap_err();

        match error {
            Error::Request { status, path } => {
                assert_eq!(status, 503);
                assert_eq!(path, "/stats");
            }
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let error = client.get_stats().await.unwrap_err();
        assert!(matches!(error, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_backend_error() {
        // Nothing listens on this port
        let client = ApiClient::new("http://127.0.0.1:1");
        let error = client.get_tickets().await.unwrap_err();
        assert!(matches!(error, Error::Backend { .. }));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ApiClient::new("http://example.test/");
        assert_eq!(client.base_url, "http://example.test");
    }
}
