//! Display helpers: two-decimal rounding, thousands grouping and the
//! summary lines shown next to the device list.

use crate::calc::{AggregationResult, DeviceBreakdown};

/// Currency label used when none is configured.
pub const DEFAULT_CURRENCY: &str = "COP";

/// Placeholder shown in summary lines before any calculation.
pub const PLACEHOLDER: &str = "-";

/// Rounds to two decimals, ties toward positive infinity.
pub fn round2(n: f64) -> f64 {
    (n * 100.0 + 0.5).floor() / 100.0
}

/// Rounds to two decimals and groups thousands with commas.
///
/// Trailing fractional zeros are dropped.
///
/// # Examples
///
/// ```
/// use energy_calc::format::format_number;
///
/// assert_eq!(format_number(1234.5), "1,234.5");
/// assert_eq!(format_number(144000.0), "144,000");
/// assert_eq!(format_number(0.005), "0.01");
/// ```
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let mut rounded = round2(n);
    if rounded == 0.0 {
        // drop the sign of -0
        rounded = 0.0;
    }

    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// One line of the per-device breakdown.
pub fn device_line(d: &DeviceBreakdown, currency: &str) -> String {
    format!(
        "{} ({} W x {} h/day) Monthly: {} Wh, {} {currency}",
        d.name,
        d.watts,
        d.hours_per_day,
        format_number(d.monthly_energy_wh),
        format_number(d.monthly_cost),
    )
}

/// The four total lines, ready to display.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLines {
    pub monthly_energy: String,
    pub monthly_cost: String,
    pub yearly_energy: String,
    pub yearly_cost: String,
}

impl SummaryLines {
    /// Builds the lines for `result`, or placeholders when there is none
    /// (before the first calculation or after a reset).
    pub fn from_result(result: Option<&AggregationResult>, currency: &str) -> Self {
        let value = |pick: fn(&AggregationResult) -> f64| {
            result.map_or_else(|| PLACEHOLDER.to_string(), |r| format_number(pick(r)))
        };
        Self {
            monthly_energy: format!(
                "Monthly energy: {} Wh",
                value(|r| r.total_monthly_energy_wh)
            ),
            monthly_cost: format!(
                "Monthly cost: {} {currency}",
                value(|r| r.total_monthly_cost)
            ),
            yearly_energy: format!(
                "Yearly energy: {} Wh",
                value(|r| r.total_yearly_energy_wh)
            ),
            yearly_cost: format!("Yearly cost: {} {currency}", value(|r| r.total_yearly_cost)),
        }
    }

    pub fn as_array(&self) -> [&str; 4] {
        [
            self.monthly_energy.as_str(),
            self.monthly_cost.as_str(),
            self.yearly_energy.as_str(),
            self.yearly_cost.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(-0.125), -0.12);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(22800.0), "22,800");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_number(-1500.5), "-1,500.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn placeholders_without_result() {
        let lines = SummaryLines::from_result(None, "COP");
        assert_eq!(lines.monthly_energy, "Monthly energy: - Wh");
        assert_eq!(lines.yearly_cost, "Yearly cost: - COP");
    }

    #[test]
    fn lines_from_result() {
        let result = AggregationResult {
            per_device: Vec::new(),
            total_monthly_energy_wh: 12000.0,
            total_monthly_cost: 6000.0,
            total_yearly_energy_wh: 144000.0,
            total_yearly_cost: 72000.0,
        };
        let lines = SummaryLines::from_result(Some(&result), "COP");
        assert_eq!(
            lines.as_array(),
            [
                "Monthly energy: 12,000 Wh",
                "Monthly cost: 6,000 COP",
                "Yearly energy: 144,000 Wh",
                "Yearly cost: 72,000 COP",
            ]
        );
    }
}
