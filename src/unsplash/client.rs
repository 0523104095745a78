use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Request};

use super::types::{ErrorBody, ImageResult, RandomPhoto, RandomPhotoQuery};
use super::{ImageSearch, TransportError};
use crate::config::UnsplashConfig;

/// Unsplash API version pinned by every request
const API_VERSION: &str = "v1";

/// `ImageSearch` backed by the Unsplash REST API.
///
/// A client is bound to one access key. The underlying `reqwest::Client`
/// is cheap to clone and can be shared between clients via `with_http`.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: Client,
    config: UnsplashConfig,
}

impl UnsplashClient {
    /// Create a client with its own connection pool
    pub fn new(config: UnsplashConfig) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http(http, config))
    }

    /// Create a client that reuses an existing connection pool
    pub fn with_http(http: Client, config: UnsplashConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &UnsplashConfig {
        &self.config
    }

    /// Build the `GET /photos/random` request without sending it
    pub fn random_photo_request(&self, query: &RandomPhotoQuery) -> Result<Request, TransportError> {
        let request = self
            .http
            .get(format!("{}/photos/random", self.config.api_url))
            .query(&[
                ("query", query.query.as_str()),
                ("orientation", query.orientation.as_str()),
            ])
            .header(AUTHORIZATION, format!("Client-ID {}", self.config.access_key.trim()))
            .header("Accept-Version", API_VERSION)
            .header(ACCEPT, "application/json")
            .timeout(self.config.timeout)
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    async fn random_photo(&self, query: &RandomPhotoQuery) -> Result<ImageResult, TransportError> {
        let request = self.random_photo_request(query)?;
        let response = self.http.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            let photo: RandomPhoto = response.json().await?;
            tracing::debug!("Unsplash returned photo {} for {:?}", photo.id, query.query);
            return Ok(ImageResult::Success(photo));
        }

        // The error body is informational only; an unreadable one still
        // counts as an API-level failure.
        let body: ErrorBody = response.json().await.unwrap_or_default();
        tracing::warn!(
            "Unsplash rejected random photo request ({}): {:?}",
            status,
            body.errors
        );

        Ok(ImageResult::Failure {
            status: status.as_u16(),
            errors: body.errors,
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .http
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> UnsplashClient {
        let config = UnsplashConfig::new("my-key")
            .with_api_url(server.uri())
            .with_timeout(Duration::from_secs(5));
        UnsplashClient::new(config).unwrap()
    }

    fn client() -> UnsplashClient {
        let config = UnsplashConfig::new("my-key")
            .with_api_url("http://localhost:9999/")
            .with_timeout(Duration::from_secs(2));
        UnsplashClient::new(config).unwrap()
    }

    #[test]
    fn test_random_photo_request_shape() {
        let request = client()
            .random_photo_request(&RandomPhotoQuery::landscape("snowy mountains"))
            .unwrap();

        assert_eq!(request.method(), &reqwest::Method::GET);
        assert_eq!(request.url().path(), "/photos/random");
        assert_eq!(request.url().host_str(), Some("localhost"));

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "snowy mountains".to_string()),
                ("orientation".to_string(), "landscape".to_string()),
            ]
        );

        let headers = request.headers();
        assert_eq!(headers[AUTHORIZATION], "Client-ID my-key");
        assert_eq!(headers["Accept-Version"], "v1");
        assert_eq!(request.timeout(), Some(&Duration::from_secs(2)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) is closed on test machines
        let config = UnsplashConfig::new("my-key")
            .with_api_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let client = UnsplashClient::new(config).unwrap();

        let result = client
            .random_photo(&RandomPhotoQuery::landscape("random"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_random_photo_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/random"))
            .and(query_param("query", "mountains"))
            .and(query_param("orientation", "landscape"))
            .and(header("Authorization", "Client-ID my-key"))
            .and(header("Accept-Version", "v1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "abc",
                "urls": { "raw": "https://images.unsplash.com/photo-1?ixid=abc" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .random_photo(&RandomPhotoQuery::landscape("mountains"))
            .await
            .unwrap();

        match result {
            ImageResult::Success(photo) => {
                assert_eq!(photo.id, "abc");
                assert_eq!(photo.urls.raw, "https://images.unsplash.com/photo-1?ixid=abc");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_random_photo_api_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/random"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({ "errors": ["Rate Limit Exceeded"] })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server)
            .random_photo(&RandomPhotoQuery::landscape("mountains"))
            .await
            .unwrap();

        assert_eq!(
            result,
            ImageResult::Failure {
                status: 403,
                errors: vec!["Rate Limit Exceeded".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_random_photo_failure_with_unreadable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/random"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .random_photo(&RandomPhotoQuery::landscape("mountains"))
            .await
            .unwrap();

        assert_eq!(result, ImageResult::Failure { status: 500, errors: vec![] });
    }

    #[tokio::test]
    async fn test_random_photo_malformed_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photos/random"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .random_photo(&RandomPhotoQuery::landscape("mountains"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_download_returns_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/photo-1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
            .mount(&server)
            .await;

        let bytes = client_for(&server)
            .download(&format!("{}/photo-1?ixid=abc&w=400&h=300", server.uri()))
            .await
            .unwrap();

        assert_eq!(bytes, vec![1u8, 2, 3]);
    }

    #[tokio::test]
    async fn test_download_not_found_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .download(&format!("{}/missing", server.uri()))
            .await;

        assert!(result.is_err());
    }
}
