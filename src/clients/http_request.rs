//! HTTP request types for the ShopSavvy Data API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the data API.

use std::fmt;

use serde::Serialize;

/// HTTP methods used by the data API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Builds a query string from ordered parameters.
///
/// Keys and values are percent-encoded and emitted in insertion order,
/// joined with `&`. Returns an empty string for no parameters.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::clients::build_query_string;
///
/// let query = build_query_string(&[
///     ("identifier".to_string(), "a b".to_string()),
///     ("format".to_string(), "json".to_string()),
/// ]);
/// assert_eq!(query, "identifier=a%20b&format=json");
/// ```
#[must_use]
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// A request to be sent to the data API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::clients::{HttpRequest, HttpMethod};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/products/details")
///     .query_param("identifier", "012345678901")
///     .query_param_opt("format", None::<String>)
///     .build();
///
/// assert_eq!(request.path_and_query(), "/products/details?identifier=012345678901");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path, relative to the base URL (e.g., "/products/details").
    pub path: String,
    /// Query parameters, in the order they were added.
    pub query: Vec<(String, String)>,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the path followed by `?` and the encoded query, if any.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, build_query_string(&self.query))
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends a query parameter only when `value` is present and non-empty.
    #[must_use]
    pub fn query_param_opt<V: Into<String>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value.map(Into::into) {
            Some(value) if !value.is_empty() => self.query_param(key, value),
            _ => self,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` to JSON and sets it as the request body.
    ///
    /// Fields marked `skip_serializing_if = "Option::is_none"` are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if `body` cannot be represented as JSON.
    pub fn json_body<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, serde_json::Error> {
        Ok(self.body(serde_json::to_value(body)?))
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}
