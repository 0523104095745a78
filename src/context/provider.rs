/// Access key provider
///
/// Makes one `UnsplashConfig` available to every placeholder below a scope
/// without threading it through each constructor.
use std::sync::Arc;

use thiserror::Error;

use super::scope::Scope;
use crate::config::UnsplashConfig;

/// Raised when the access key is read outside any provider.
///
/// This is a programming mistake, not a runtime failure, and is never
/// turned into an on-screen error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("read_access_key must be used within an AccessKeyProvider")]
pub struct ConfigurationError;

/// Installs an `UnsplashConfig` into a scope
pub struct AccessKeyProvider;

impl AccessKeyProvider {
    /// Provide `access_key` (with default API settings) below `parent`
    pub fn provide(parent: &Arc<Scope>, access_key: impl Into<String>) -> Arc<Scope> {
        Self::provide_config(parent, UnsplashConfig::new(access_key))
    }

    /// Provide a full configuration below `parent`
    pub fn provide_config(parent: &Arc<Scope>, config: UnsplashConfig) -> Arc<Scope> {
        tracing::debug!(
            "Providing Unsplash configuration at scope depth {}",
            parent.depth() + 1
        );
        parent.provide(config)
    }
}

/// Read the nearest provided configuration
pub fn read_access_key(scope: &Scope) -> Result<Arc<UnsplashConfig>, ConfigurationError> {
    scope.lookup::<UnsplashConfig>().ok_or(ConfigurationError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_outside_provider_fails() {
        let root = Scope::root();
        let err = read_access_key(&root).unwrap_err();
        assert_eq!(err, ConfigurationError);
        assert!(err.to_string().contains("must be used within"));
    }

    #[test]
    fn test_read_inside_provider() {
        let scope = AccessKeyProvider::provide(&Scope::root(), "secret");
        let config = read_access_key(&scope).unwrap();
        assert_eq!(config.access_key, "secret");
    }

    #[test]
    fn test_reprovisioning_shadows_outer_key() {
        let outer = AccessKeyProvider::provide(&Scope::root(), "outer");
        let inner = AccessKeyProvider::provide(&outer, "inner");

        assert_eq!(read_access_key(&inner).unwrap().access_key, "inner");
        assert_eq!(read_access_key(&outer).unwrap().access_key, "outer");
    }

    #[test]
    fn test_unrelated_values_do_not_satisfy_lookup() {
        let scope = Scope::root().provide(String::from("not a config"));
        assert!(read_access_key(&scope).is_err());
    }
}
