/// Unsplash API payloads
///
/// Only the fields a placeholder needs are modelled. Unknown fields are
/// ignored by serde so API additions do not break decoding.
use serde::{Deserialize, Serialize};

/// Photo orientation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }
}

/// Parameters for `GET /photos/random`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPhotoQuery {
    pub query: String,
    pub orientation: Orientation,
}

impl RandomPhotoQuery {
    /// A single landscape photo matching `query`
    pub fn landscape(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            orientation: Orientation::Landscape,
        }
    }
}

/// Links to the different renditions of a photo
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhotoUrls {
    /// Original image; accepts imgix sizing parameters
    pub raw: String,
    #[serde(default)]
    pub full: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// A random photo as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomPhoto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
}

/// Body of a non-2xx API response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Outcome of a request that reached the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageResult {
    Success(RandomPhoto),
    /// The API answered but reported failure
    Failure { status: u16, errors: Vec<String> },
}
