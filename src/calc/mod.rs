//! Energy and cost aggregation over a registry snapshot.

/// Pure aggregation over device records.
pub mod engine;
/// Unit cost and billing-day parameters.
pub mod params;
/// Per-device breakdown and grand totals.
pub mod result;

pub use engine::calculate;
pub use params::AggregationParameters;
pub use result::{AggregationResult, DeviceBreakdown};
