//! Household electricity consumption and cost calculator.

/// Aggregation engine, parameters and results.
pub mod calc;
pub mod cli;
pub mod config;
pub mod devices;
pub mod format;
pub mod io;
pub mod session;

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "tui")]
pub mod tui;
