//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated ShopSavvy API key.
///
/// Keys have the shape `ss_live_<alphanumeric>` or `ss_test_<alphanumeric>`.
/// The secret portion is masked in debug output to prevent accidental
/// exposure in logs.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::ApiKey;
///
/// let key = ApiKey::new("ss_test_abc123").unwrap();
/// assert!(key.is_test());
/// assert_eq!(format!("{:?}", key), "ApiKey(ss_test_*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    const LIVE_PREFIX: &'static str = "ss_live_";
    const TEST_PREFIX: &'static str = "ss_test_";

    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it does not match
    /// `ss_(live|test)_[A-Za-z0-9]+`.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let secret = key
            .strip_prefix(Self::LIVE_PREFIX)
            .or_else(|| key.strip_prefix(Self::TEST_PREFIX))
            .ok_or(ConfigError::InvalidApiKey)?;

        if secret.is_empty() || !secret.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidApiKey);
        }

        Ok(Self(key))
    }

    /// Returns `true` for `ss_test_` keys.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.0.starts_with(Self::TEST_PREFIX)
    }

    /// Returns `true` for `ss_live_` keys.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.starts_with(Self::LIVE_PREFIX)
    }

    fn prefix(&self) -> &'static str {
        if self.is_test() {
            Self::TEST_PREFIX
        } else {
            Self::LIVE_PREFIX
        }
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({}*****)", self.prefix())
    }
}

/// A validated API base URL.
///
/// The URL must carry an alphabetic scheme and a non-empty host. Trailing
/// slashes are trimmed so request paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.shopsavvy.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.shopsavvy.com/v1");
/// assert_eq!(url.host_name(), "api.shopsavvy.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The production API root.
    pub const PRODUCTION: &'static str = "https://api.shopsavvy.com/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        // Paths are appended directly, so a query or fragment would swallow them
        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        // Host ends at port, path, or end of string
        let host_end = url[host_start..]
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the production API root.
    #[must_use]
    pub fn production() -> Self {
        Self {
            url: Self::PRODUCTION.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: 25,
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
