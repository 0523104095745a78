//! Placeholder images from Unsplash for iced applications.
//!
//! A [`PlaceholderImage`](ui::PlaceholderImage) asks Unsplash for one random
//! landscape photo matching its query and shows a loading box, an error box
//! or the photo. The access key comes either from an
//! [`AccessKeyProvider`](context::AccessKeyProvider) scope or is injected
//! directly.

pub mod config;
pub mod context;
pub mod fetch;
pub mod ui;
pub mod unsplash;

pub use config::UnsplashConfig;
pub use context::{read_access_key, AccessKeyProvider, ConfigurationError, Scope};
pub use fetch::{FetchError, FetchState, RequestParams};
pub use ui::{KeySource, PlaceholderImage, PlaceholderProps, Rendered};
pub use unsplash::{unsplash_connector, ImageSearch, SearchConnector, UnsplashClient};
