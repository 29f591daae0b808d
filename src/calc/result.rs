//! Aggregation output: per-device breakdown and totals.

use std::fmt;

use serde::Serialize;

use crate::format::{SummaryLines, device_line};

/// Monthly figures for one included device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceBreakdown {
    pub name: String,
    pub watts: f64,
    pub hours_per_day: f64,
    /// `watts * hours_per_day * billing_days_per_month`.
    pub monthly_energy_wh: f64,
    /// `monthly_energy_wh * unit_cost`.
    pub monthly_cost: f64,
}

/// Result of one calculation.
///
/// A plain value computed from a registry snapshot; later registry edits do
/// not change it. Numbers are unrounded, see [`crate::format`] for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    /// One entry per enabled device, in registry order.
    pub per_device: Vec<DeviceBreakdown>,
    pub total_monthly_energy_wh: f64,
    pub total_monthly_cost: f64,
    pub total_yearly_energy_wh: f64,
    pub total_yearly_cost: f64,
}

impl AggregationResult {
    /// A result with no devices and all totals at zero.
    pub fn empty() -> Self {
        Self {
            per_device: Vec::new(),
            total_monthly_energy_wh: 0.0,
            total_monthly_cost: 0.0,
            total_yearly_energy_wh: 0.0,
            total_yearly_cost: 0.0,
        }
    }

    /// Renders the report with the given currency label.
    pub fn report(&self, currency: &str) -> Report<'_> {
        Report {
            result: self,
            currency: currency.to_string(),
        }
    }
}

/// Plain-text rendering of an [`AggregationResult`].
pub struct Report<'a> {
    result: &'a AggregationResult,
    currency: String,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Devices ---")?;
        if self.result.per_device.is_empty() {
            writeln!(f, "(no enabled devices)")?;
        }
        for d in &self.result.per_device {
            writeln!(f, "{}", device_line(d, &self.currency))?;
        }
        writeln!(f)?;
        writeln!(f, "--- Totals ---")?;
        let lines = SummaryLines::from_result(Some(self.result), &self.currency);
        writeln!(f, "{}", lines.monthly_energy)?;
        writeln!(f, "{}", lines.monthly_cost)?;
        writeln!(f, "{}", lines.yearly_energy)?;
        write!(f, "{}", lines.yearly_cost)
    }
}

impl fmt::Display for AggregationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.report(crate::format::DEFAULT_CURRENCY), f)
    }
}
