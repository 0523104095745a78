/// Unsplash client configuration
///
/// The access key is the only value a placeholder strictly needs. The API
/// URL and timeout exist so the client can be pointed at a proxy or a test
/// server.
use std::time::Duration;

/// Environment variable holding the Unsplash access key
pub const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

/// Environment variable overriding the API base URL
pub const API_URL_VAR: &str = "UNSPLASH_API_URL";

/// Environment variable overriding the request timeout (whole seconds)
pub const TIMEOUT_VAR: &str = "UNSPLASH_TIMEOUT_SECS";

/// Public Unsplash API endpoint
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// Timeout applied to every request unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration shared by every placeholder in a provider scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsplashConfig {
    /// Opaque credential sent as `Client-ID`. May be empty, which is
    /// reported to the user as a missing key rather than a crash.
    pub access_key: String,
    /// Base URL without trailing slash
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl UnsplashConfig {
    /// Create a configuration for the public API
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different API host
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is honoured. A missing access
    /// key yields an empty key; malformed timeouts fall back to the default.
    pub fn from_env() -> Self {
        // Absence of a .env file is normal
        let _ = dotenv::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(lookup(ACCESS_KEY_VAR).unwrap_or_default());

        if let Some(url) = lookup(API_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config = config.with_api_url(url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_VAR, raw),
            }
        }

        config
    }

    /// The access key, or `None` when it is empty or blank
    pub fn access_key(&self) -> Option<&str> {
        normalize_key(&self.access_key)
    }
}

/// Treat blank keys as absent
pub(crate) fn normalize_key(key: &str) -> Option<&str> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}
