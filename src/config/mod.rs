//! Configuration types for the Mailjet API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication with Mailjet.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MailjetConfig`]: The main configuration struct holding all client settings
//! - [`MailjetConfigBuilder`]: A builder for constructing [`MailjetConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecretKey`]: A validated API secret key newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use mailjet_api::{MailjetConfig, ApiKey, ApiSecretKey};
//!
//! let config = MailjetConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://api.mailjet.com/v3");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecretKey};

use crate::error::ConfigError;

/// Production API host.
const PRODUCTION_HOST: &str = "api.mailjet.com";

/// Preprod API host.
const PREPROD_HOST: &str = "api.preprod.mailjet.com";

/// API version path segment; the preprod endpoint expects it with a trailing
/// zero (`v30`).
const API_VERSION: &str = "v3";

/// Configuration for the Mailjet API client.
///
/// This struct holds all configuration needed for client operations: the
/// credential pair sent as basic auth, the environment and scheme selectors,
/// and an optional base-URL override.
///
/// # Thread Safety
///
/// `MailjetConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use mailjet_api::{MailjetConfig, ApiKey, ApiSecretKey};
///
/// let config = MailjetConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
///     .preprod(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url(), "https://api.preprod.mailjet.com/v30");
/// ```
#[derive(Clone, Debug)]
pub struct MailjetConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    preprod: bool,
    secure: bool,
    api_url: Option<String>,
}

impl MailjetConfig {
    /// Creates a new builder for constructing a `MailjetConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailjet_api::{MailjetConfig, ApiKey, ApiSecretKey};
    ///
    /// let config = MailjetConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> MailjetConfigBuilder {
        MailjetConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Returns whether calls target the preprod environment.
    #[must_use]
    pub const fn is_preprod(&self) -> bool {
        self.preprod
    }

    /// Returns whether calls use `https`.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }

    /// Returns the fully resolved API base URL, without a trailing slash.
    ///
    /// Derived from the `secure` and `preprod` flags unless an explicit
    /// override was configured:
    ///
    /// - production: `https://api.mailjet.com/v3`
    /// - preprod: `https://api.preprod.mailjet.com/v30`
    /// - with `secure(false)`: same hosts over `http`
    #[must_use]
    pub fn api_url(&self) -> String {
        if let Some(url) = &self.api_url {
            return url.clone();
        }

        let scheme = if self.secure { "https" } else { "http" };
        let (host, version) = if self.preprod {
            (PREPROD_HOST, format!("{API_VERSION}0"))
        } else {
            (PRODUCTION_HOST, API_VERSION.to_string())
        };

        format!("{scheme}://{host}/{version}")
    }
}

// Verify MailjetConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailjetConfig>();
};

/// Builder for constructing [`MailjetConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `api_key` and `api_secret_key`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `preprod`: `false` (production environment)
/// - `secure`: `true` (https)
/// - `api_url`: `None` (derived from the two flags)
///
/// # Example
///
/// ```rust
/// use mailjet_api::{MailjetConfig, ApiKey, ApiSecretKey};
///
/// let config = MailjetConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
///     .secure(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_url(), "http://api.mailjet.com/v3");
/// ```
#[derive(Debug, Default)]
pub struct MailjetConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    preprod: Option<bool>,
    secure: Option<bool>,
    api_url: Option<String>,
}

impl MailjetConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key (required).
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Selects the preprod environment instead of production.
    #[must_use]
    pub const fn preprod(mut self, preprod: bool) -> Self {
        self.preprod = Some(preprod);
        self
    }

    /// Selects `https` (`true`, the default) or `http` (`false`).
    #[must_use]
    pub const fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Overrides the API base URL entirely.
    ///
    /// When set, the `preprod` and `secure` flags no longer influence the
    /// base URL. Useful for proxies and for pointing the client at a local
    /// test server. A trailing slash is trimmed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailjet_api::{MailjetConfig, ApiKey, ApiSecretKey};
    ///
    /// let config = MailjetConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
    ///     .api_url("http://localhost:8080/v3/")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.api_url(), "http://localhost:8080/v3");
    /// ```
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Builds the [`MailjetConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret_key` are not set, and [`ConfigError::InvalidApiUrl`] if a
    /// base-URL override lacks an `http`/`https` scheme.
    pub fn build(self) -> Result<MailjetConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret_key = self
            .api_secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret_key",
            })?;

        let api_url = match self.api_url {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidApiUrl { url });
                }
                Some(url)
            }
            None => None,
        };

        Ok(MailjetConfig {
            api_key,
            api_secret_key,
            preprod: self.preprod.unwrap_or(false),
            secure: self.secure.unwrap_or(true),
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_config(builder: MailjetConfigBuilder) -> MailjetConfig {
        builder
            .api_key(ApiKey::new("key").unwrap())
            .api_secret_key(ApiSecretKey::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = MailjetConfigBuilder::new()
            .api_secret_key(ApiSecretKey::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_api_secret_key() {
        let result = MailjetConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_secret_key"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = build_config(MailjetConfig::builder());

        assert!(!config.is_preprod());
        assert!(config.is_secure());
        assert_eq!(config.api_url(), "https://api.mailjet.com/v3");
    }

    #[test]
    fn test_api_url_matrix() {
        let config = build_config(MailjetConfig::builder().preprod(true));
        assert_eq!(config.api_url(), "https://api.preprod.mailjet.com/v30");

        let config = build_config(MailjetConfig::builder().secure(false));
        assert_eq!(config.api_url(), "http://api.mailjet.com/v3");

        let config = build_config(MailjetConfig::builder().preprod(true).secure(false));
        assert_eq!(config.api_url(), "http://api.preprod.mailjet.com/v30");
    }

    #[test]
    fn test_api_url_override_trims_trailing_slash() {
        let config = build_config(MailjetConfig::builder().api_url("http://localhost:9999/v3/"));
        assert_eq!(config.api_url(), "http://localhost:9999/v3");
    }

    #[test]
    fn test_api_url_override_wins_over_flags() {
        let config = build_config(
            MailjetConfig::builder()
                .preprod(true)
                .secure(false)
                .api_url("https://proxy.internal/mailjet/v3"),
        );
        assert_eq!(config.api_url(), "https://proxy.internal/mailjet/v3");
    }

    #[test]
    fn test_api_url_override_requires_scheme() {
        let result = MailjetConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret_key(ApiSecretKey::new("secret").unwrap())
            .api_url("localhost:9999/v3")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MailjetConfig>();
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = MailjetConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret_key(ApiSecretKey::new("super-secret-value").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("MailjetConfig"));
        assert!(debug_str.contains("ApiSecretKey(*****)"));
        assert!(!debug_str.contains("super-secret-value"));
    }

    #[test]
    fn test_config_is_clone() {
        let config = build_config(MailjetConfig::builder());
        let cloned = config.clone();
        assert_eq!(cloned.api_key(), config.api_key());
        assert_eq!(cloned.api_url(), config.api_url());
    }
}
