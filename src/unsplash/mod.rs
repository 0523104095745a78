/// Image-search collaborator
///
/// This module handles:
/// - The `ImageSearch` seam placeholders fetch through
/// - Unsplash wire types (types.rs)
/// - The reqwest-backed Unsplash client (client.rs)

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::UnsplashConfig;
pub use client::UnsplashClient;
pub use types::{ImageResult, Orientation, PhotoUrls, RandomPhoto, RandomPhotoQuery};

/// A request that never produced an API answer: network failure, timeout,
/// or a body that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Source of random photos
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Ask for one random photo matching `query`
    async fn random_photo(&self, query: &RandomPhotoQuery) -> Result<ImageResult, TransportError>;

    /// Fetch the bytes behind an image URL
    async fn download(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// Builds an `ImageSearch` bound to a configuration.
///
/// Placeholders create a new client whenever their access key changes.
pub type SearchConnector = Arc<dyn Fn(&UnsplashConfig) -> Arc<dyn ImageSearch> + Send + Sync>;

/// Connector producing `UnsplashClient`s that share one connection pool
pub fn unsplash_connector() -> SearchConnector {
    let http = reqwest::Client::new();

    Arc::new(move |config: &UnsplashConfig| -> Arc<dyn ImageSearch> {
        Arc::new(UnsplashClient::with_http(http.clone(), config.clone()))
    })
}
