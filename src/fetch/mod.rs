/// Placeholder fetch lifecycle
///
/// - Request parameters, fetch state and error taxonomy (state.rs)
/// - Rerun tickets guarding against out-of-order results (rerun.rs)
/// - The async operation that turns parameters into a loaded image (here)

pub mod rerun;
pub mod state;

use iced::widget::image::Handle;

use crate::unsplash::{ImageResult, ImageSearch, RandomPhotoQuery, TransportError};
pub use rerun::{Rerun, Ticket};
pub use state::{sized_url, FetchError, FetchState, LoadedImage, RequestParams};

/// Fetch one random landscape photo for `params` and download it at the
/// requested size.
///
/// Exactly one search request is issued. Every outcome resolves to either
/// a loaded image or a `FetchError`; nothing is retried.
pub async fn fetch_placeholder(
    search: &dyn ImageSearch,
    params: &RequestParams,
) -> Result<LoadedImage, FetchError> {
    let query = RandomPhotoQuery::landscape(params.query.clone());

    let photo = match search.random_photo(&query).await? {
        ImageResult::Success(photo) => photo,
        ImageResult::Failure { status, errors } => {
            return Err(FetchError::ApiFailure { status, errors });
        }
    };

    let url = sized_url(&photo.urls.raw, params.width, params.height);
    let bytes = search.download(&url).await?;

    let format = image::guess_format(&bytes)
        .map_err(|e| TransportError(format!("Downloaded payload is not an image: {}", e)))?;
    tracing::debug!("Downloaded {:?} image ({} bytes) from {}", format, bytes.len(), url);

    Ok(LoadedImage {
        url,
        handle: Handle::from_bytes(bytes),
    })
}
