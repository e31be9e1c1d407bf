//! Account credit usage.

use serde::{Deserialize, Serialize};

/// Credit consumption for the current billing period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UsagePeriod {
    /// First day of the period, as reported by the API.
    pub start_date: String,

    /// Last day of the period, as reported by the API.
    pub end_date: String,

    /// Credits consumed so far.
    pub credits_used: u64,

    /// Credits included in the plan.
    pub credits_limit: u64,

    /// Credits left.
    pub credits_remaining: u64,

    /// Number of API requests made.
    #[serde(default)]
    pub requests_made: u64,
}

/// Usage summary returned by `/usage`.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::models::UsageInfo;
///
/// let usage: UsageInfo = serde_json::from_str(r#"{
///     "current_period": {
///         "start_date": "2024-03-01",
///         "end_date": "2024-03-31",
///         "credits_used": 250,
///         "credits_limit": 1000,
///         "credits_remaining": 750
///     },
///     "usage_percentage": 25.0
/// }"#).unwrap();
///
/// assert_eq!(usage.current_period.credits_remaining, 750);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsageInfo {
    /// The current billing period.
    pub current_period: UsagePeriod,

    /// Share of the plan consumed, 0-100.
    #[serde(default)]
    pub usage_percentage: f64,
}
