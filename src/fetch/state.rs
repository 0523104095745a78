/// Fetch state shared between the fetch lifecycle and the view
use iced::widget::image::Handle;
use std::fmt;
use thiserror::Error;

use crate::unsplash::TransportError;

/// Default search query
pub const DEFAULT_QUERY: &str = "random";

/// Default target width in pixels
pub const DEFAULT_WIDTH: u32 = 400;

/// Default target height in pixels
pub const DEFAULT_HEIGHT: u32 = 300;

/// What to fetch: one random photo for `query`, served at `width`x`height`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestParams {
    pub query: String,
    pub width: u32,
    pub height: u32,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl RequestParams {
    pub fn new(query: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            query: query.into(),
            width,
            height,
        }
    }
}

/// Why a fetch attempt ended in the error state.
///
/// `Display` is exactly the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No access key was available; no request was issued
    #[error("Unsplash API key is missing. Please set UNSPLASH_ACCESS_KEY in your .env file.")]
    MissingCredential,

    /// The API answered with a failure
    #[error("Failed to fetch image")]
    ApiFailure { status: u16, errors: Vec<String> },

    /// The request never produced a usable answer
    #[error("An error occurred while fetching the image")]
    Transport(#[from] TransportError),
}

/// A successfully fetched photo
#[derive(Clone)]
pub struct LoadedImage {
    /// Raw URL with the target size appended
    pub url: String,
    /// Downloaded pixels, ready for the image widget
    pub handle: Handle,
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage").field("url", &self.url).finish()
    }
}

/// Exactly one of these is active per placeholder
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Error(String),
    Loaded(LoadedImage),
}

impl FetchState {
    /// Resolve an attempt's outcome into a state
    pub fn from_outcome(outcome: Result<LoadedImage, FetchError>) -> Self {
        match outcome {
            Ok(image) => FetchState::Loaded(image),
            Err(err) => FetchState::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            FetchState::Loaded(image) => Some(&image.url),
            _ => None,
        }
    }
}

/// Append the target size to a raw photo URL.
///
/// Raw Unsplash URLs already carry a query string, so the size is joined
/// with `&`.
pub fn sized_url(raw: &str, width: u32, height: u32) -> String {
    format!("{}&w={}&h={}", raw, width, height)
}
