//! Device records and raw numeric input coercion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One household appliance: its power draw, daily usage and whether it
/// takes part in the aggregation.
///
/// Records that arrive without an `enabled` field deserialize as enabled,
/// so exclusion is always an explicit opt-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Stable identifier, unique within a registry.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Power draw in watts.
    pub watts: f64,
    /// Daily usage in hours.
    pub hours_per_day: f64,
    /// Disabled devices stay in the registry but are skipped by aggregation.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl DeviceRecord {
    /// Creates an enabled record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        watts: f64,
        hours_per_day: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            watts: sanitize(watts),
            hours_per_day: sanitize(hours_per_day),
            enabled: true,
        }
    }

    /// Daily energy in watt-hours (`watts * hours_per_day`).
    pub fn daily_energy_wh(&self) -> f64 {
        self.watts * self.hours_per_day
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.enabled { "x" } else { " " };
        write!(
            f,
            "[{mark}] {:<24} {:>8} W x {:>5} h/day",
            self.name, self.watts, self.hours_per_day
        )
    }
}

/// Raw user input for a numeric device field or parameter.
///
/// Input comes either as text typed into a form field or as an already
/// parsed number (JSON, TOML). Both go through [`FieldValue::coerce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Pre-parsed numeric input.
    Number(f64),
    /// Text exactly as typed.
    Text(String),
}

impl FieldValue {
    /// Interprets the input as a number, falling back to 0.
    ///
    /// Text is trimmed; empty or unparseable text yields 0. NaN and
    /// infinities also yield 0. Negative numbers pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use energy_calc::devices::FieldValue;
    ///
    /// assert_eq!(FieldValue::from(" 12.5 ").coerce(), 12.5);
    /// assert_eq!(FieldValue::from("abc").coerce(), 0.0);
    /// assert_eq!(FieldValue::from("").coerce(), 0.0);
    /// assert_eq!(FieldValue::from(-3.0).coerce(), -3.0);
    /// ```
    pub fn coerce(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }

    /// Like [`coerce`](Self::coerce), but with an explicit fallback for
    /// input that is missing, invalid or zero.
    pub fn coerce_or(&self, fallback: f64) -> f64 {
        match self.parse() {
            Some(v) if v != 0.0 => v,
            _ => fallback,
        }
    }

    fn parse(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Some(0.0);
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Replaces NaN and infinities with 0.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(FieldValue::from("150").coerce(), 150.0);
        assert_eq!(FieldValue::from("0.25").coerce(), 0.25);
        assert_eq!(FieldValue::from(".5").coerce(), 0.5);
        assert_eq!(FieldValue::from("1e3").coerce(), 1000.0);
    }

    #[test]
    fn garbage_text_coerces_to_zero() {
        for raw in ["", "   ", "abc", "12W", "1,5", "NaN", "inf", "-infinity"] {
            assert_eq!(FieldValue::from(raw).coerce(), 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn non_finite_numbers_coerce_to_zero() {
        assert_eq!(FieldValue::from(f64::NAN).coerce(), 0.0);
        assert_eq!(FieldValue::from(f64::INFINITY).coerce(), 0.0);
    }

    #[test]
    fn negative_input_is_kept() {
        assert_eq!(FieldValue::from("-40").coerce(), -40.0);
    }

    #[test]
    fn coerce_or_replaces_zero_and_invalid() {
        assert_eq!(FieldValue::from("").coerce_or(30.0), 30.0);
        assert_eq!(FieldValue::from("0").coerce_or(30.0), 30.0);
        assert_eq!(FieldValue::from("x").coerce_or(30.0), 30.0);
        assert_eq!(FieldValue::from("31").coerce_or(30.0), 31.0);
    }

    #[test]
    fn missing_enabled_field_defaults_to_true() {
        let toml = r#"
id = "kettle"
name = "Kettle"
watts = 2000
hours_per_day = 0.1
"#;
        let record: DeviceRecord = toml::from_str(toml).expect("record should parse");
        assert!(record.enabled);
        assert_eq!(record.watts, 2000.0);
    }

    #[test]
    fn untagged_field_value_accepts_numbers_and_text() {
        #[derive(Deserialize)]
        struct Wrapper {
            v: FieldValue,
        }
        let n: Wrapper = toml::from_str("v = 75").expect("integer should parse");
        assert_eq!(n.v.coerce(), 75.0);
        let s: Wrapper = toml::from_str("v = \"3.5\"").expect("string should parse");
        assert_eq!(s.v.coerce(), 3.5);
    }
}
