//! Error types for the ShopSavvy Data API SDK.
//!
//! This module contains the construction-time error type. A [`ConfigError`]
//! means no client was created; per-call failures use
//! [`ApiError`](crate::clients::ApiError) instead.
//!
//! # Example
//!
//! ```rust
//! use shopsavvy_data_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the SDK.
///
/// Each variant carries a clear, actionable message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid ShopSavvy API key.")]
    EmptyApiKey,

    /// API key does not have the expected shape.
    #[error("Invalid API key format. API keys must start with 'ss_live_' or 'ss_test_' followed by alphanumeric characters.")]
    InvalidApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.shopsavvy.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Timeout must be positive.
    #[error("Invalid timeout of {timeout_ms}ms. The timeout must be greater than zero.")]
    InvalidTimeout {
        /// The rejected timeout in milliseconds.
        timeout_ms: u64,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP transport could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// Why the transport failed to initialize.
        reason: String,
    },
}
