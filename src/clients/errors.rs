//! Per-call error types for the ShopSavvy Data API SDK.
//!
//! Every failed call surfaces exactly one [`ApiError`]. The variant is the
//! error kind; callers dispatch with `match` (or on [`ApiError::kind`]).
//! The SDK never retries or suppresses these errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopsavvy_data_api::ApiError;
//!
//! match client.get_product_details("012345678901", None).await {
//!     Ok(response) => println!("{}", response.data.name),
//!     Err(ApiError::RateLimit { .. }) => println!("slow down"),
//!     Err(ApiError::Timeout { timeout_ms }) => println!("gave up after {timeout_ms}ms"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Message for 401 responses.
pub const AUTHENTICATION_MESSAGE: &str = "Authentication failed. Check your API key.";
/// Message for 404 responses.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
/// Message for 422 responses.
pub const VALIDATION_MESSAGE: &str = "Request validation failed. Check your parameters.";
/// Message for 429 responses.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please slow down your requests.";
/// Message for 2xx bodies that do not match the expected envelope.
pub const DESERIALIZE_MESSAGE: &str = "Failed to deserialize response";

/// Discriminant of an [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 401 from the API.
    Authentication,
    /// 404 from the API.
    NotFound,
    /// 422 from the API.
    Validation,
    /// 429 from the API.
    RateLimit,
    /// Any other non-2xx status, or an undecodable success body.
    Api,
    /// Transport failure before a status was received.
    Network,
    /// The configured per-call timeout elapsed.
    Timeout,
    /// The caller aborted the call.
    Cancelled,
}

/// Error returned by every data API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API rejected the credentials (HTTP 401).
    #[error("{message}")]
    Authentication {
        /// Fixed human-readable message.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("{message}")]
    NotFound {
        /// Fixed human-readable message.
        message: String,
    },

    /// The API rejected the request parameters (HTTP 422).
    #[error("{message}")]
    Validation {
        /// Fixed human-readable message.
        message: String,
    },

    /// Too many requests (HTTP 429).
    #[error("{message}")]
    RateLimit {
        /// Fixed human-readable message.
        message: String,
    },

    /// Any other API failure.
    ///
    /// `status` is the HTTP status that produced the error.
    #[error("{message}")]
    Api {
        /// The HTTP status code, if one was received.
        status: Option<u16>,
        /// Human-readable message.
        message: String,
    },

    /// Connection, DNS, TLS or other transport failure.
    ///
    /// The transport's description is available through
    /// [`std::error::Error::source`].
    #[error("Network error")]
    Network {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The call did not complete within the configured timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The caller cancelled the call before it completed.
    #[error("Request was cancelled")]
    Cancelled,
}

impl ApiError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Authentication { .. } => ApiErrorKind::Authentication,
            Self::NotFound { .. } => ApiErrorKind::NotFound,
            Self::Validation { .. } => ApiErrorKind::Validation,
            Self::RateLimit { .. } => ApiErrorKind::RateLimit,
            Self::Api { .. } => ApiErrorKind::Api,
            Self::Network { .. } => ApiErrorKind::Network,
            Self::Timeout { .. } => ApiErrorKind::Timeout,
            Self::Cancelled => ApiErrorKind::Cancelled,
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(422),
            Self::RateLimit { .. } => Some(429),
            Self::Api { status, .. } => *status,
            Self::Network { .. } | Self::Timeout { .. } | Self::Cancelled => None,
        }
    }

    /// Maps a transport-level failure to a timeout or network error.
    ///
    /// Timeouts are detected with [`reqwest::Error::is_timeout`].
    #[must_use]
    pub fn from_transport(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            return Self::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }
        Self::Network { source: error }
    }

    pub(crate) fn deserialize_failed(status: u16) -> Self {
        Self::Api {
            status: Some(status),
            message: DESERIALIZE_MESSAGE.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Extracts a message from an error body.
///
/// Uses the string `error` field of a JSON object when present, otherwise
/// the raw body text.
fn error_message(raw_body: &str) -> String {
    serde_json::from_str::<ErrorBody>(raw_body)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| raw_body.to_string())
}

/// Classifies a non-success HTTP response into an [`ApiError`].
///
/// 401, 404, 422 and 429 map to fixed messages regardless of the body.
/// Every other status becomes [`ApiError::Api`] with the message
/// `"HTTP {status}: {message}"`.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::clients::classify;
///
/// let error = classify(500, r#"{"error":"boom"}"#);
/// assert_eq!(error.to_string(), "HTTP 500: boom");
/// assert_eq!(error.status(), Some(500));
/// ```
#[must_use]
pub fn classify(status: u16, raw_body: &str) -> ApiError {
    match status {
        401 => ApiError::Authentication {
            message: AUTHENTICATION_MESSAGE.to_string(),
        },
        404 => ApiError::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        },
        422 => ApiError::Validation {
            message: VALIDATION_MESSAGE.to_string(),
        },
        429 => ApiError::RateLimit {
            message: RATE_LIMIT_MESSAGE.to_string(),
        },
        _ => ApiError::Api {
            status: Some(status),
            message: format!("HTTP {status}: {}", error_message(raw_body)),
        },
    }
}
