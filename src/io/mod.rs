//! File output for calculation results.

/// CSV export of per-device breakdowns.
pub mod export;
