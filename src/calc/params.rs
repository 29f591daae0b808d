//! Aggregation parameters and their coercion from raw input.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::devices::FieldValue;

/// Billing days assumed when none (or zero) is given.
pub const DEFAULT_BILLING_DAYS: f64 = 30.0;

/// Months per year used to scale monthly totals.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Scalar inputs of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationParameters {
    /// Price per watt-hour in the display currency.
    pub unit_cost: f64,
    /// Days used to scale daily energy to a month.
    pub billing_days_per_month: f64,
}

impl Default for AggregationParameters {
    fn default() -> Self {
        Self {
            unit_cost: 0.0,
            billing_days_per_month: DEFAULT_BILLING_DAYS,
        }
    }
}

impl AggregationParameters {
    /// Creates parameters from already-numeric values, sanitizing NaN and
    /// infinities the same way raw input is.
    pub fn new(unit_cost: f64, billing_days_per_month: f64) -> Self {
        Self::from_inputs(unit_cost, billing_days_per_month)
    }

    /// Builds parameters from raw input.
    ///
    /// Invalid or empty unit cost becomes 0. Invalid, empty or zero billing
    /// days become [`DEFAULT_BILLING_DAYS`]. Negative values are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use energy_calc::calc::AggregationParameters;
    ///
    /// let p = AggregationParameters::from_inputs("", "");
    /// assert_eq!(p.unit_cost, 0.0);
    /// assert_eq!(p.billing_days_per_month, 30.0);
    ///
    /// let p = AggregationParameters::from_inputs("0.75", "31");
    /// assert_eq!((p.unit_cost, p.billing_days_per_month), (0.75, 31.0));
    /// ```
    pub fn from_inputs(
        unit_cost: impl Into<FieldValue>,
        billing_days_per_month: impl Into<FieldValue>,
    ) -> Self {
        let params = Self {
            unit_cost: unit_cost.into().coerce(),
            billing_days_per_month: billing_days_per_month
                .into()
                .coerce_or(DEFAULT_BILLING_DAYS),
        };
        if params.unit_cost < 0.0 || params.billing_days_per_month < 0.0 {
            warn!(
                unit_cost = params.unit_cost,
                billing_days_per_month = params.billing_days_per_month,
                "negative aggregation parameter accepted"
            );
        }
        params
    }
}
