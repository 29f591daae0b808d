//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::calc::{AggregationParameters, AggregationResult};
use crate::devices::{DeviceEdit, DeviceField, FieldValue};

/// Partial update for one device. Numeric fields accept a number or the
/// raw text of a form field.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevicePatch {
    pub enabled: Option<bool>,
    pub watts: Option<FieldValue>,
    pub hours_per_day: Option<FieldValue>,
}

impl DevicePatch {
    /// Expands the patch into registry edits, in field order.
    pub fn into_edits(self, index: usize) -> Vec<DeviceEdit> {
        let mut edits = Vec::new();
        if let Some(enabled) = self.enabled {
            edits.push(DeviceEdit::new(index, DeviceField::Enabled(enabled)));
        }
        if let Some(watts) = self.watts {
            edits.push(DeviceEdit::new(index, DeviceField::Watts(watts)));
        }
        if let Some(hours) = self.hours_per_day {
            edits.push(DeviceEdit::new(index, DeviceField::HoursPerDay(hours)));
        }
        edits
    }
}

/// Optional new parameters for a calculation. Omitted fields keep the
/// session's current value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculateRequest {
    pub unit_cost: Option<FieldValue>,
    pub billing_days_per_month: Option<FieldValue>,
}

impl CalculateRequest {
    /// Merges the request into `current`, coercing supplied raw values.
    pub fn merge(self, current: &AggregationParameters) -> AggregationParameters {
        if self.unit_cost.is_none() && self.billing_days_per_month.is_none() {
            return *current;
        }
        AggregationParameters::from_inputs(
            self.unit_cost.unwrap_or(FieldValue::Number(current.unit_cost)),
            self.billing_days_per_month
                .unwrap_or(FieldValue::Number(current.billing_days_per_month)),
        )
    }
}

/// Calculation output with the parameters used and display-ready totals.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub params: AggregationParameters,
    pub result: AggregationResult,
    /// Rounded, grouped total lines.
    pub summary: Vec<String>,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
