/// UI components
///
/// - The placeholder image component (placeholder.rs)
/// - Its toolkit-independent view model and HTML markup (rendered.rs)

pub mod placeholder;
pub mod rendered;

pub use placeholder::{KeySource, Message, PlaceholderImage, PlaceholderProps};
pub use rendered::Rendered;
