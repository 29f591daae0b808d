//! Filter, map and sum over device records.

use tracing::info;

use super::params::{AggregationParameters, MONTHS_PER_YEAR};
use super::result::{AggregationResult, DeviceBreakdown};
use crate::devices::DeviceRecord;

/// Computes the monthly breakdown and monthly/yearly totals for every
/// enabled record.
///
/// Neither input is modified. Disabled records are skipped entirely.
///
/// # Examples
///
/// ```
/// use energy_calc::calc::{AggregationParameters, calculate};
/// use energy_calc::devices::DeviceRecord;
///
/// let records = vec![DeviceRecord::new("tv", "TV", 100.0, 4.0)];
/// let result = calculate(&records, &AggregationParameters::new(0.5, 30.0));
///
/// assert_eq!(result.total_monthly_energy_wh, 12_000.0);
/// assert_eq!(result.total_monthly_cost, 6_000.0);
/// assert_eq!(result.total_yearly_energy_wh, 144_000.0);
/// assert_eq!(result.total_yearly_cost, 72_000.0);
/// ```
pub fn calculate(records: &[DeviceRecord], params: &AggregationParameters) -> AggregationResult {
    let per_device: Vec<DeviceBreakdown> = records
        .iter()
        .filter(|r| r.enabled)
        .map(|r| {
            let monthly_energy_wh = r.daily_energy_wh() * params.billing_days_per_month;
            DeviceBreakdown {
                name: r.name.clone(),
                watts: r.watts,
                hours_per_day: r.hours_per_day,
                monthly_energy_wh,
                monthly_cost: monthly_energy_wh * params.unit_cost,
            }
        })
        .collect();

    let total_monthly_energy_wh: f64 = per_device.iter().map(|d| d.monthly_energy_wh).sum();
    let total_monthly_cost: f64 = per_device.iter().map(|d| d.monthly_cost).sum();

    let result = AggregationResult {
        per_device,
        total_monthly_energy_wh,
        total_monthly_cost,
        total_yearly_energy_wh: total_monthly_energy_wh * MONTHS_PER_YEAR,
        total_yearly_cost: total_monthly_cost * MONTHS_PER_YEAR,
    };
    info!(
        devices = result.per_device.len(),
        monthly_wh = result.total_monthly_energy_wh,
        monthly_cost = result.total_monthly_cost,
        "calculation complete"
    );
    result
}
