//! Retailer offers and price history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single retailer's current offer for a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Offer {
    /// Identifier of this offer.
    pub offer_id: String,

    /// Retailer name (e.g., "amazon", "walmart").
    pub retailer: String,

    /// Current price, if listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Stock status (e.g., "in_stock", "out_of_stock").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Item condition (e.g., "new", "used", "refurbished").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Link to the offer on the retailer's site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Shipping cost, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<f64>,

    /// When the retailer data was last refreshed, as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// One observed price point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceHistoryEntry {
    /// Observation date.
    pub date: NaiveDate,

    /// Observed price.
    pub price: f64,

    /// Stock status on that date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

/// An offer together with its price history over the requested range.
///
/// The offer fields are flattened into the same JSON object as
/// `price_history`.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::models::OfferWithHistory;
///
/// let json = r#"{
///     "offer_id": "o1",
///     "retailer": "amazon",
///     "price": 19.99,
///     "price_history": [{"date": "2024-01-01", "price": 24.99}]
/// }"#;
///
/// let offer: OfferWithHistory = serde_json::from_str(json).unwrap();
/// assert_eq!(offer.offer.retailer, "amazon");
/// assert_eq!(offer.price_history.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferWithHistory {
    /// The current offer.
    #[serde(flatten)]
    pub offer: Offer,

    /// Price points, oldest first.
    #[serde(default)]
    pub price_history: Vec<PriceHistoryEntry>,
}

impl OfferWithHistory {
    /// Returns the lowest observed price in the history.
    #[must_use]
    pub fn lowest_price(&self) -> Option<f64> {
        self.price_history
            .iter()
            .map(|entry| entry.price)
            .reduce(f64::min)
    }
}
