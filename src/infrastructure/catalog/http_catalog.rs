//! HTTP-backed catalogue source.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::entities::CatalogRecord;
use crate::domain::repositories::CatalogSource;
use crate::error::{CatalogError, CatalogResult};

/// Fetches the catalogue with a plain `GET <url>`.
///
/// No timeout is configured beyond the transport defaults; a hung request
/// only delays the refresh that issued it.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Creates a source for the given catalogue URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(url: impl Into<String>) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> CatalogResult<Vec<CatalogRecord>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let values: Vec<Value> = serde_json::from_slice(&body)?;
        debug!(url = %self.url, records = values.len(), "Fetched catalogue");

        Ok(values.into_iter().map(CatalogRecord::from_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn source_for(server: &MockServer) -> HttpCatalogSource {
        HttpCatalogSource::new(format!("{}/resources.json", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_catalog_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resources.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "id-1", "slug": "first", "title": "First" },
                { "id": "id-2" },
                "garbage"
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let records = source_for(&server).await.fetch_catalog().await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], CatalogRecord::new("id-1", "first"));
        assert_eq!(records[1].slug, None);
        assert_eq!(records[2], CatalogRecord::default());
    }

    #[tokio::test]
    async fn test_fetch_catalog_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(500)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_not_an_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch_catalog().await.unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_fetch_catalog_connection_refused() {
        let server = MockServer::start().await;
        let source = source_for(&server).await;
        drop(server);

        let err = source.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
