/// Configuration scopes
///
/// - Generic typed scope chain (scope.rs)
/// - Access key provider built on it (provider.rs)

pub mod scope;
pub mod provider;

pub use provider::{read_access_key, AccessKeyProvider, ConfigurationError};
pub use scope::Scope;
