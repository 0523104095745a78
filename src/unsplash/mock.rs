//! In-memory `ImageSearch` for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::types::{ImageResult, PhotoUrls, RandomPhoto, RandomPhotoQuery};
use super::{ImageSearch, TransportError};

/// Smallest payload `image::guess_format` recognises as PNG
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

#[derive(Debug, Clone)]
pub enum Reply {
    Photo(String),
    Failure(u16),
    Transport,
}

#[derive(Debug)]
pub struct MockSearch {
    reply: Reply,
    /// `None` makes every download fail
    payload: Option<Vec<u8>>,
    pub queries: Mutex<Vec<RandomPhotoQuery>>,
    pub downloads: Mutex<Vec<String>>,
    searches: AtomicUsize,
}

impl MockSearch {
    pub fn new(reply: Reply) -> Arc<Self> {
        Self::with_payload(reply, PNG_BYTES.to_vec())
    }

    pub fn photo(raw: &str) -> Arc<Self> {
        Self::new(Reply::Photo(raw.to_string()))
    }

    pub fn with_payload(reply: Reply, payload: Vec<u8>) -> Arc<Self> {
        Self::build(reply, Some(payload))
    }

    /// Searches answer with `reply`, downloads fail
    pub fn with_download_error(reply: Reply) -> Arc<Self> {
        Self::build(reply, None)
    }

    fn build(reply: Reply, payload: Option<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            payload,
            queries: Mutex::new(Vec::new()),
            downloads: Mutex::new(Vec::new()),
            searches: AtomicUsize::new(0),
        })
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSearch for MockSearch {
    async fn random_photo(&self, query: &RandomPhotoQuery) -> Result<ImageResult, TransportError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());

        match &self.reply {
            Reply::Photo(raw) => Ok(ImageResult::Success(RandomPhoto {
                id: "mock".to_string(),
                alt_description: None,
                urls: PhotoUrls {
                    raw: raw.clone(),
                    full: None,
                    regular: None,
                    small: None,
                    thumb: None,
                },
            })),
            Reply::Failure(status) => Ok(ImageResult::Failure {
                status: *status,
                errors: vec!["Rate Limit Exceeded".to_string()],
            }),
            Reply::Transport => Err(TransportError("connection reset".to_string())),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.downloads.lock().unwrap().push(url.to_string());
        self.payload
            .clone()
            .ok_or_else(|| TransportError("HTTP status client error (404 Not Found)".to_string()))
    }
}
