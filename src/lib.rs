//! # ShopSavvy Data API Rust SDK
//!
//! A thin, typed client for the ShopSavvy Data API: product lookups,
//! retailer offers, price history, monitoring schedules and credit usage.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Validated configuration via [`ShopSavvyConfig`] and [`ShopSavvyConfigBuilder`]
//! - A request pipeline ([`HttpClient`]) with bearer authentication and per-call timeouts
//! - A typed client ([`DataApiClient`]) with one async method per API operation
//! - A small error taxonomy ([`ApiError`]) derived from HTTP status codes
//! - Response records in [`models`], all wrapped in [`ApiResponse`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopsavvy_data_api::{ApiKey, DataApiClient, ShopSavvyConfig};
//!
//! let config = ShopSavvyConfig::builder()
//!     .api_key(ApiKey::new("ss_test_abc123").unwrap())
//!     .timeout_ms(10_000)
//!     .build()
//!     .unwrap();
//!
//! let client = DataApiClient::new(config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopsavvy_data_api::{ApiError, DataApiClient, MonitoringFrequency};
//!
//! let client = DataApiClient::with_api_key("ss_live_abc123")?;
//!
//! let product = client.get_product_details("012345678901", None).await?;
//! let offers = client.get_current_offers(&product.data.product_id, Some("amazon"), None).await?;
//!
//! client
//!     .schedule_product_monitoring(&product.data.product_id, MonitoringFrequency::Daily, None)
//!     .await?;
//!
//! match client.get_usage().await {
//!     Ok(usage) => println!("{} credits left", usage.data.current_period.credits_remaining),
//!     Err(ApiError::Authentication { message }) => eprintln!("{message}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Keys and URLs are validated on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **No hidden work**: No retries, caching or background tasks

pub mod clients;
pub mod config;
pub mod error;
pub mod models;

pub use config::{ApiKey, BaseUrl, ShopSavvyConfig, ShopSavvyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    classify, ApiError, ApiErrorKind, DataApiClient, HttpClient, HttpMethod, HttpRequest,
    HttpRequestBuilder, MonitoringFrequency, ResponseFormat,
};

pub use models::ApiResponse;
