//! HTTP client for ShopSavvy Data API communication.
//!
//! This module provides the [`HttpClient`] type: it turns one
//! [`HttpRequest`] into one HTTP exchange and decodes the response envelope.
//! There is no retry logic; every failure is returned to the caller.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use serde::de::DeserializeOwned;

use crate::clients::errors::{classify, ApiError};
use crate::clients::http_request::HttpRequest;
use crate::config::ShopSavvyConfig;
use crate::error::ConfigError;
use crate::models::ApiResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the data API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including bearer authentication and User-Agent
/// - Per-call timeout enforcement
/// - Error classification for non-2xx responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no per-call mutable state, so a
/// single instance can serve concurrent calls.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The immutable SDK configuration.
    config: ShopSavvyConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

// Headers are left out: they carry the bearer token.
impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// No network access happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the transport cannot be
    /// initialized (e.g., TLS backend failure).
    pub fn new(config: ShopSavvyConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}ShopSavvy Data API Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            config,
            default_headers,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ShopSavvyConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a request: base URL, path, then query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}{}", self.config.base_url(), request.path_and_query())
    }

    /// Sends a request and decodes the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - A transport failure occurs (`Network`) or the timeout elapses (`Timeout`)
    /// - A non-2xx status is received (classified by [`classify`])
    /// - A 2xx body does not decode into `ApiResponse<T>` (`Api`)
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.url_for(&request);

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), &url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending request to ShopSavvy Data API");

        let res = req_builder
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let code = res.status().as_u16();
        let body_text = res.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(status = code, path = %request.path, "Received response");

        if !(200..300).contains(&code) {
            let error = classify(code, &body_text);
            tracing::warn!(status = code, path = %request.path, "ShopSavvy Data API request failed: {error}");
            return Err(error);
        }

        serde_json::from_str::<ApiResponse<T>>(&body_text).map_err(|e| {
            tracing::warn!(status = code, path = %request.path, "Failed to deserialize response: {e}");
            ApiError::deserialize_failed(code)
        })
    }

    /// Sends a request that the caller can abort.
    ///
    /// The call is raced against `cancel`. If `cancel` completes first the
    /// in-flight request is dropped and [`ApiError::Cancelled`] is returned.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), plus [`ApiError::Cancelled`].
    pub async fn execute_with_cancel<T, C>(
        &self,
        request: HttpRequest,
        cancel: C,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        C: Future<Output = ()>,
    {
        race_cancel(self.execute(request), cancel).await
    }

    fn transport_error(&self, error: reqwest::Error) -> ApiError {
        tracing::warn!(error = %error, "ShopSavvy Data API transport failure");
        ApiError::from_transport(error, self.config.timeout())
    }
}

/// Runs `operation` unless `cancel` completes first.
///
/// On cancellation the operation future is dropped, which aborts any
/// in-flight exchange, and [`ApiError::Cancelled`] is returned.
pub(super) async fn race_cancel<T, F, C>(operation: F, cancel: C) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
    C: Future<Output = ()>,
{
    tokio::select! {
        result = operation => result,
        () = cancel => {
            tracing::debug!("Request cancelled by caller");
            Err(ApiError::Cancelled)
        }
    }
}
