//! Configuration types for the ShopSavvy Data API SDK.
//!
//! This module provides the configuration holder used to construct clients.
//!
//! # Overview
//!
//! - [`ShopSavvyConfig`]: Immutable SDK settings (API key, base URL, timeout)
//! - [`ShopSavvyConfigBuilder`]: A builder for constructing [`ShopSavvyConfig`] instances
//! - [`ApiKey`]: A validated `ss_live_`/`ss_test_` API key with masked debug output
//! - [`BaseUrl`]: A validated API root URL
//!
//! # Example
//!
//! ```rust
//! use shopsavvy_data_api::{ShopSavvyConfig, ApiKey};
//!
//! let config = ShopSavvyConfig::builder()
//!     .api_key(ApiKey::new("ss_test_abc123").unwrap())
//!     .timeout_ms(10_000)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.shopsavvy.com/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-call timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for the ShopSavvy Data API SDK.
///
/// # Thread Safety
///
/// `ShopSavvyConfig` is `Clone`, `Send`, and `Sync`. It is immutable once built.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::ShopSavvyConfig;
///
/// let config = ShopSavvyConfig::new("ss_live_abc123").unwrap();
/// assert_eq!(config.timeout_ms(), 30_000);
/// ```
#[derive(Clone, Debug)]
pub struct ShopSavvyConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    timeout_ms: u64,
    user_agent_prefix: Option<String>,
}

impl ShopSavvyConfig {
    /// Creates a configuration from an API key, using default base URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the key is empty or malformed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().api_key(ApiKey::new(api_key)?).build()
    }

    /// Creates a new builder for constructing a `ShopSavvyConfig`.
    #[must_use]
    pub fn builder() -> ShopSavvyConfigBuilder {
        ShopSavvyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-call timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ShopSavvyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopSavvyConfig>();
};

/// Builder for constructing [`ShopSavvyConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.shopsavvy.com/v1`
/// - `timeout_ms`: `30000`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ShopSavvyConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    timeout_ms: Option<u64>,
    user_agent_prefix: Option<String>,
}

impl ShopSavvyConfigBuilder {
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

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-call timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Sets a prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ShopSavvyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set,
    /// or [`ConfigError::InvalidTimeout`] if the timeout is zero.
    pub fn build(self) -> Result<ShopSavvyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let timeout_ms = self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout { timeout_ms });
        }

        Ok(ShopSavvyConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            timeout_ms,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
