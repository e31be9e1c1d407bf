//! HTTP client types for ShopSavvy Data API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The request pipeline (one request in, one envelope or error out)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`ApiError`]: The per-call error taxonomy
//! - [`classify`]: Maps a failed HTTP response to an [`ApiError`]
//! - [`data_api::DataApiClient`]: Typed methods for every API operation
//!
//! # Example
//!
//! ```rust,ignore
//! use shopsavvy_data_api::clients::{HttpClient, HttpRequest, HttpMethod};
//! use shopsavvy_data_api::models::UsageInfo;
//! use shopsavvy_data_api::ShopSavvyConfig;
//!
//! let client = HttpClient::new(ShopSavvyConfig::new("ss_test_abc123")?)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/usage").build();
//! let usage = client.execute::<UsageInfo>(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call makes exactly one HTTP request and every failure is
//! returned to the caller.

pub mod data_api;
mod errors;
mod http_client;
mod http_request;

pub use errors::{
    classify, ApiError, ApiErrorKind, AUTHENTICATION_MESSAGE, DESERIALIZE_MESSAGE,
    NOT_FOUND_MESSAGE, RATE_LIMIT_MESSAGE, VALIDATION_MESSAGE,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{build_query_string, HttpMethod, HttpRequest, HttpRequestBuilder};

pub use data_api::{DataApiClient, MonitoringFrequency, ResponseFormat};
