//! Payload records for the ShopSavvy Data API.
//!
//! Every endpoint wraps its payload in [`ApiResponse`]. The records here are
//! plain data mirroring the API's JSON fields; a missing required field makes
//! deserialization fail, which the client surfaces as a generic API error.
//!
//! | Operation | Payload |
//! |---|---|
//! | product details | [`ProductDetails`] |
//! | batch product details | `Vec<ProductDetails>` |
//! | current offers | `Vec<Offer>` |
//! | batch current offers | `HashMap<String, Vec<Offer>>` |
//! | price history | `Vec<OfferWithHistory>` |
//! | schedule monitoring | [`ScheduleResponse`] |
//! | batch schedule | `Vec<ScheduleBatchResult>` |
//! | list scheduled | `Vec<ScheduledProduct>` |
//! | remove from schedule | [`RemoveResponse`] |
//! | batch remove | `Vec<RemoveBatchResult>` |
//! | usage info | [`UsageInfo`] |

mod offer;
mod product;
mod response;
mod schedule;
mod usage;

pub use offer::{Offer, OfferWithHistory, PriceHistoryEntry};
pub use product::ProductDetails;
pub use response::ApiResponse;
pub use schedule::{
    RemoveBatchResult, RemoveResponse, ScheduleBatchResult, ScheduleResponse, ScheduledProduct,
};
pub use usage::{UsageInfo, UsagePeriod};
