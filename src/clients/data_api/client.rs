//! Typed client for the ShopSavvy Data API.
//!
//! This module provides [`DataApiClient`], with one async method per API
//! operation. Each method maps directly to a single HTTP call.

use std::collections::HashMap;
use std::future::Future;

use chrono::NaiveDate;

use crate::clients::data_api::requests::{
    join_identifiers, MonitoringFrequency, RemoveBatchRequest, RemoveRequest, ResponseFormat,
    ScheduleBatchRequest, ScheduleRequest,
};
use crate::clients::http_client::race_cancel;
use crate::clients::{ApiError, HttpClient, HttpMethod, HttpRequest};
use crate::config::ShopSavvyConfig;
use crate::error::ConfigError;
use crate::models::{
    ApiResponse, Offer, OfferWithHistory, ProductDetails, RemoveBatchResult, RemoveResponse,
    ScheduleBatchResult, ScheduleResponse, ScheduledProduct, UsageInfo,
};

const PRODUCT_DETAILS_PATH: &str = "/products/details";
const PRODUCT_OFFERS_PATH: &str = "/products/offers";
const PRODUCT_HISTORY_PATH: &str = "/products/history";
const PRODUCT_SCHEDULE_PATH: &str = "/products/schedule";
const PRODUCT_SCHEDULED_PATH: &str = "/products/scheduled";
const USAGE_PATH: &str = "/usage";

/// Client for the ShopSavvy Data API.
///
/// Owns its HTTP transport for its whole lifetime. The transport is released
/// when the client is dropped or [`close`](Self::close)d.
///
/// # Thread Safety
///
/// `DataApiClient` is `Send + Sync`. Share it (e.g., behind an `Arc`) to run
/// calls concurrently; it holds no mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use shopsavvy_data_api::{DataApiClient, ShopSavvyConfig};
///
/// let client = DataApiClient::new(ShopSavvyConfig::new("ss_live_abc123")?)?;
///
/// let product = client.get_product_details("012345678901", None).await?;
/// println!("{} ({} credits left)", product.data.name, product.credits_remaining.unwrap_or(0));
///
/// client.close();
/// ```
#[derive(Debug)]
pub struct DataApiClient {
    http_client: HttpClient,
}

// Verify DataApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DataApiClient>();
};

impl DataApiClient {
    /// Creates a new client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP transport cannot
    /// be initialized.
    pub fn new(config: ShopSavvyConfig) -> Result<Self, ConfigError> {
        tracing::debug!(
            base_url = %config.base_url(),
            timeout_ms = config.timeout_ms(),
            test_mode = config.api_key().is_test(),
            "Creating ShopSavvy Data API client"
        );
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Creates a client from an API key with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the key is invalid or the transport cannot
    /// be initialized.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(ShopSavvyConfig::new(api_key)?)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ShopSavvyConfig {
        self.http_client.config()
    }

    /// Returns the underlying request pipeline.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Releases the HTTP transport.
    ///
    /// Consumes the client, so it cannot be used or closed again.
    pub fn close(self) {
        tracing::debug!("Closing ShopSavvy Data API client");
        drop(self);
    }

    /// Runs any operation of this client so that the caller can abort it.
    ///
    /// If `cancel` completes before `operation`, the in-flight call is
    /// dropped and [`ApiError::Cancelled`] is returned. Timeouts and
    /// transport failures are reported unchanged.
    ///
    /// # Errors
    ///
    /// Returns the operation's [`ApiError`], or [`ApiError::Cancelled`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let usage = DataApiClient::with_cancel(
    ///     client.get_usage(),
    ///     tokio::time::sleep(Duration::from_secs(2)),
    /// )
    /// .await?;
    /// ```
    pub async fn with_cancel<T, F, C>(operation: F, cancel: C) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
        C: Future<Output = ()>,
    {
        race_cancel(operation, cancel).await
    }

    /// Looks up product details by any identifier.
    ///
    /// `GET /products/details?identifier=..&format=..`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_product_details(
        &self,
        identifier: &str,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<ProductDetails>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCT_DETAILS_PATH)
            .query_param("identifier", identifier)
            .query_param_opt("format", format.map(ResponseFormat::as_str))
            .build();
        self.http_client.execute(request).await
    }

    /// Looks up product details for several identifiers in one call.
    ///
    /// `GET /products/details?identifiers=a,b&format=..`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_product_details_batch<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<ProductDetails>>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCT_DETAILS_PATH)
            .query_param("identifiers", join_identifiers(identifiers))
            .query_param_opt("format", format.map(ResponseFormat::as_str))
            .build();
        self.http_client.execute(request).await
    }

    /// Fetches current offers for a product, optionally from one retailer.
    ///
    /// `GET /products/offers?identifier=..&retailer=..&format=..`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_current_offers(
        &self,
        identifier: &str,
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<Offer>>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCT_OFFERS_PATH)
            .query_param("identifier", identifier)
            .query_param_opt("retailer", retailer)
            .query_param_opt("format", format.map(ResponseFormat::as_str))
            .build();
        self.http_client.execute(request).await
    }

    /// Fetches current offers for several products, keyed by identifier.
    ///
    /// `GET /products/offers?identifiers=a,b&retailer=..&format=..`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_current_offers_batch<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<HashMap<String, Vec<Offer>>>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCT_OFFERS_PATH)
            .query_param("identifiers", join_identifiers(identifiers))
            .query_param_opt("retailer", retailer)
            .query_param_opt("format", format.map(ResponseFormat::as_str))
            .build();
        self.http_client.execute(request).await
    }

    /// Fetches price history between two dates (inclusive).
    ///
    /// `GET /products/history?identifier=..&start_date=YYYY-MM-DD&end_date=YYYY-MM-DD&retailer=..&format=..`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_price_history(
        &self,
        identifier: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        retailer: Option<&str>,
        format: Option<ResponseFormat>,
    ) -> Result<ApiResponse<Vec<OfferWithHistory>>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCT_HISTORY_PATH)
            .query_param("identifier", identifier)
            .query_param("start_date", start_date.format("%Y-%m-%d").to_string())
            .query_param("end_date", end_date.format("%Y-%m-%d").to_string())
            .query_param_opt("retailer", retailer)
            .query_param_opt("format", format.map(ResponseFormat::as_str))
            .build();
        self.http_client.execute(request).await
    }

    /// Schedules a product for recurring monitoring.
    ///
    /// `POST /products/schedule` with `{identifier, frequency, retailer?}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn schedule_product_monitoring(
        &self,
        identifier: &str,
        frequency: MonitoringFrequency,
        retailer: Option<&str>,
    ) -> Result<ApiResponse<ScheduleResponse>, ApiError> {
        let body = ScheduleRequest {
            identifier,
            frequency,
            retailer,
        };
        let request = HttpRequest::builder(HttpMethod::Post, PRODUCT_SCHEDULE_PATH)
            .json_body(&body)
            .map_err(|e| Self::body_error(&e))?
            .build();
        self.http_client.execute(request).await
    }

    /// Schedules several products for monitoring in one call.
    ///
    /// `POST /products/schedule` with `{identifiers: "a,b", frequency, retailer?}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn schedule_product_monitoring_batch<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
        frequency: MonitoringFrequency,
        retailer: Option<&str>,
    ) -> Result<ApiResponse<Vec<ScheduleBatchResult>>, ApiError> {
        let body = ScheduleBatchRequest {
            identifiers: join_identifiers(identifiers),
            frequency,
            retailer,
        };
        let request = HttpRequest::builder(HttpMethod::Post, PRODUCT_SCHEDULE_PATH)
            .json_body(&body)
            .map_err(|e| Self::body_error(&e))?
            .build();
        self.http_client.execute(request).await
    }

    /// Lists all products scheduled for monitoring.
    ///
    /// `GET /products/scheduled`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_scheduled_products(
        &self,
    ) -> Result<ApiResponse<Vec<ScheduledProduct>>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, PRODUCT_SCHEDULED_PATH).build();
        self.http_client.execute(request).await
    }

    /// Removes a product from the monitoring schedule.
    ///
    /// `DELETE /products/schedule` with `{identifier}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn remove_product_from_schedule(
        &self,
        identifier: &str,
    ) -> Result<ApiResponse<RemoveResponse>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, PRODUCT_SCHEDULE_PATH)
            .json_body(&RemoveRequest { identifier })
            .map_err(|e| Self::body_error(&e))?
            .build();
        self.http_client.execute(request).await
    }

    /// Removes several products from the monitoring schedule.
    ///
    /// `DELETE /products/schedule` with `{identifiers: "a,b"}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn remove_products_from_schedule<S: AsRef<str> + Sync>(
        &self,
        identifiers: &[S],
    ) -> Result<ApiResponse<Vec<RemoveBatchResult>>, ApiError> {
        let body = RemoveBatchRequest {
            identifiers: join_identifiers(identifiers),
        };
        let request = HttpRequest::builder(HttpMethod::Delete, PRODUCT_SCHEDULE_PATH)
            .json_body(&body)
            .map_err(|e| Self::body_error(&e))?
            .build();
        self.http_client.execute(request).await
    }

    /// Fetches credit usage for the current billing period.
    ///
    /// `GET /usage`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_usage(&self) -> Result<ApiResponse<UsageInfo>, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, USAGE_PATH).build();
        self.http_client.execute(request).await
    }

    fn body_error(error: &serde_json::Error) -> ApiError {
        ApiError::Api {
            status: None,
            message: format!("Failed to serialize request body: {error}"),
        }
    }
}
