//! Configuration types for the Best Buy catalog client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CatalogConfig`]: The immutable client configuration
//! - [`CatalogConfigBuilder`]: A builder for constructing [`CatalogConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated base endpoint URL
//!
//! # Example
//!
//! ```rust
//! use bestbuy_catalog::{ApiKey, CatalogConfig};
//!
//! let config = CatalogConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .page_size(50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size(), 50);
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Environment variable holding the API key for [`CatalogConfig::from_env`].
pub const API_KEY_ENV: &str = "BESTBUY_API_KEY";

/// Environment variable overriding the base URL for [`CatalogConfig::from_env`].
pub const API_URL_ENV: &str = "BESTBUY_API_URL";

/// Number of items requested per page when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Configuration for the catalog client.
///
/// Holds the credential token, the base endpoint and the page size. A
/// `CatalogConfig` cannot be changed once built.
///
/// # Thread Safety
///
/// `CatalogConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use bestbuy_catalog::{ApiKey, BaseUrl, CatalogConfig};
///
/// let config = CatalogConfig::builder()
///     .api_key(ApiKey::new("ABC").unwrap())
///     .base_url(BaseUrl::new("https://api.bestbuy.com/v1").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.page_size(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    page_size: u32,
    user_agent_prefix: Option<String>,
}

impl CatalogConfig {
    /// Creates a new builder for constructing a `CatalogConfig`.
    #[must_use]
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads the API key from `BESTBUY_API_KEY` and, if set, the base URL
    /// from `BESTBUY_API_URL`. All other settings use their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if the key variable
    /// is unset, or a validation error if either value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingEnvironmentVariable { name: API_KEY_ENV })?;

        let mut builder = Self::builder().api_key(ApiKey::new(api_key)?);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        builder.build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base endpoint URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CatalogConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogConfig>();
};

/// Builder for constructing [`CatalogConfig`] instances.
///
/// The only required field is `api_key`.
///
/// # Defaults
///
/// - `base_url`: `https://api.bestbuy.com/v1`
/// - `page_size`: `100`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    page_size: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl CatalogConfigBuilder {
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

    /// Sets the base endpoint URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the number of items requested per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CatalogConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidPageSize`] if the page size is zero.
    pub fn build(self) -> Result<CatalogConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        Ok(CatalogConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            page_size,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
