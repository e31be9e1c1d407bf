//! The uniform response envelope.

use serde::{Deserialize, Serialize};

/// Envelope returned by every data API endpoint.
///
/// `T` is the endpoint's payload: a single record, a list, or a map from
/// identifier to list.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::models::{ApiResponse, ProductDetails};
///
/// let json = r#"{
///     "success": true,
///     "data": {"product_id": "p1", "name": "Widget"},
///     "credits_used": 1,
///     "credits_remaining": 99
/// }"#;
///
/// let response: ApiResponse<ProductDetails> = serde_json::from_str(json).unwrap();
/// assert!(response.success);
/// assert_eq!(response.data.name, "Widget");
/// assert_eq!(response.credits_remaining, Some(99));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    /// Whether the API reports the call as successful.
    pub success: bool,

    /// The endpoint payload.
    pub data: T,

    /// Optional informational message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Credits consumed by this call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<u64>,

    /// Credits left in the current billing period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_remaining: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_envelope_with_optional_fields_absent() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();

        assert_eq!(response.data, vec![1, 2, 3]);
        assert!(response.message.is_none());
        assert!(response.credits_used.is_none());
        assert!(response.credits_remaining.is_none());
    }

    #[test]
    fn test_envelope_with_map_payload() {
        let json = r#"{"success":true,"data":{"a":[1],"b":[]},"message":"ok"}"#;
        let response: ApiResponse<HashMap<String, Vec<u32>>> = serde_json::from_str(json).unwrap();

        assert_eq!(response.data["a"], vec![1]);
        assert!(response.data["b"].is_empty());
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_envelope_requires_data() {
        let result = serde_json::from_str::<ApiResponse<Vec<u32>>>(r#"{"success":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_body_is_rejected() {
        assert!(serde_json::from_str::<ApiResponse<Vec<u32>>>("null").is_err());
    }
}
