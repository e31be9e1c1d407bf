//! Typed ShopSavvy Data API operations.
//!
//! - [`DataApiClient`]: one method per API operation
//! - [`ResponseFormat`], [`MonitoringFrequency`]: typed request options
//! - [`join_identifiers`]: comma-joins identifiers for batch endpoints

mod client;
mod requests;

pub use client::DataApiClient;
pub use requests::{join_identifiers, MonitoringFrequency, ResponseFormat};
