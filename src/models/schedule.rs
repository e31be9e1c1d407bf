//! Monitoring schedule records.

use serde::{Deserialize, Serialize};

/// A product currently scheduled for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledProduct {
    /// ShopSavvy product identifier.
    pub product_id: String,

    /// The identifier the product was scheduled with.
    pub identifier: String,

    /// Refresh frequency ("hourly", "daily" or "weekly").
    pub frequency: String,

    /// Retailer restriction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retailer: Option<String>,

    /// When the schedule was created, as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the product was last refreshed, as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_refreshed: Option<String>,
}

/// Confirmation for a single schedule request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleResponse {
    /// Whether the product is now scheduled.
    pub scheduled: bool,

    /// The resolved product identifier.
    pub product_id: String,
}

/// Per-identifier result of a batch schedule request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleBatchResult {
    /// The identifier as submitted.
    pub identifier: String,

    /// Whether this identifier is now scheduled.
    pub scheduled: bool,

    /// The resolved product identifier, when one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Confirmation for a single removal request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveResponse {
    /// Whether the product was removed from the schedule.
    pub removed: bool,
}

/// Per-identifier result of a batch removal request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveBatchResult {
    /// The identifier as submitted.
    pub identifier: String,

    /// Whether this identifier was removed.
    pub removed: bool,
}
