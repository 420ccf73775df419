//! HTTP access to the news search service.
//!
//! The panel talks to the service through the [`FetchNews`] trait so tests can
//! substitute a scripted fetcher. [`HttpNewsClient`] is the real thing: one
//! GET per call with the search window (and optionally the method) as query
//! parameters, a status check, and a JSON decode of the body.
//!
//! The endpoint URL is supplied once at construction and never re-read; there
//! is deliberately no retry, no debounce, and no request timeout: a failed
//! activation surfaces in the panel's status line and the user re-triggers
//! manually.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{PanelError, Result};
use crate::models::SearchResult;

/// Inputs read at activation time.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Size of the search window in days. Sent as-is; range validation is the
    /// service's business.
    pub days: i64,
    /// Search method label, forwarded unvalidated when present.
    pub method: Option<String>,
}

/// Anything that can answer a search activation.
#[async_trait]
pub trait FetchNews: Send + Sync {
    async fn fetch(&self, query: &SearchQuery) -> Result<SearchResult>;
}

/// The real HTTP client behind the panel.
pub struct HttpNewsClient {
    endpoint: Url,
    http: Client,
}

impl HttpNewsClient {
    /// Build a client for the given endpoint URL.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    /// The endpoint with this query's parameters appended.
    fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("dias", &query.days.to_string());
            if let Some(method) = &query.method {
                pairs.append_pair("metodo", method);
            }
        }
        url
    }
}

#[async_trait]
impl FetchNews for HttpNewsClient {
    #[instrument(level = "info", skip_all, fields(days = query.days))]
    async fn fetch(&self, query: &SearchQuery) -> Result<SearchResult> {
        let url = self.request_url(query);
        debug!(%url, "Requesting news");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "News service returned an error status");
            return Err(PanelError::Status(status));
        }

        // Decode via serde_json rather than reqwest's json() so a bad body
        // classifies as Decode instead of a generic reqwest error.
        let body = response.text().await?;
        let result = serde_json::from_str::<SearchResult>(&body)?;
        debug!(count = result.count, "Decoded search result");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpNewsClient {
        let endpoint = Url::parse(&format!("{}/buscar-noticias", server.uri())).unwrap();
        HttpNewsClient::new(endpoint)
    }

    const BODY: &str = r#"{
        "tipo": "royalties",
        "periodo": "Últimos 7 dias",
        "quantidade": 1,
        "noticias": [
            {"data": "01/05/2024", "titulo": "A", "fonte": "X", "relevancia": 8, "link": "http://a"}
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_sends_days_and_method_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/buscar-noticias"))
            .and(query_param("dias", "7"))
            .and(query_param("metodo", "rss"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery {
            days: 7,
            method: Some("rss".to_string()),
        };
        let result = client.fetch(&query).await.unwrap();
        assert_eq!(result.kind, "royalties");
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_omits_method_param_when_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/buscar-noticias"))
            .and(query_param("dias", "30"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery {
            days: 30,
            method: None,
        };
        let result = client.fetch(&query).await.unwrap();
        // The mock only matched on `dias`; make sure nothing else was sent.
        assert!(!client.request_url(&query).as_str().contains("metodo"));
        assert_eq!(result.count, 1);
    }

    #[tokio::test]
    async fn test_days_round_trips_as_string_form() {
        for days in [-3i64, 0, 1, 90, 100_000] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(query_param("dias", days.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
                .expect(1)
                .mount(&server)
                .await;

            let client = client_for(&server);
            let query = SearchQuery { days, method: None };
            client.fetch(&query).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_non_2xx_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"detail": "boom"}"#))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery {
            days: 7,
            method: None,
        };
        let err = client.fetch(&query).await.unwrap_err();
        assert!(matches!(err, PanelError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query = SearchQuery {
            days: 7,
            method: None,
        };
        let err = client.fetch(&query).await.unwrap_err();
        assert!(matches!(err, PanelError::Decode(_)));
    }
}
