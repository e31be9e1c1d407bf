//! Product catalog records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Catalog details for a single product.
///
/// `product_id` and `name` are always present; everything else depends on
/// what the API knows about the product.
///
/// # Example
///
/// ```rust
/// use shopsavvy_data_api::models::ProductDetails;
///
/// let product: ProductDetails = serde_json::from_str(
///     r#"{"product_id":"p1","name":"Widget","brand":"Acme","barcode":"012345678901"}"#,
/// ).unwrap();
///
/// assert_eq!(product.brand.as_deref(), Some("Acme"));
/// assert!(product.asin.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductDetails {
    /// ShopSavvy's own product identifier.
    pub product_id: String,

    /// Product name.
    pub name: String,

    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Category path (e.g., "Electronics > Audio").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Long-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary product image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// UPC/EAN barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Amazon Standard Identification Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,

    /// Manufacturer model number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Manufacturer part number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,

    /// Other known identifiers, keyed by identifier type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<HashMap<String, String>>,
}
