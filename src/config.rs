//! TOML household profile: pricing, display and per-device overrides.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::calc::AggregationParameters;
use crate::devices::{DeviceEdit, DeviceField, FieldValue, Registry, catalog};
use crate::format::DEFAULT_CURRENCY;
use crate::session::Session;

/// Top-level household configuration parsed from TOML.
///
/// All sections are optional. Load from TOML with
/// [`HouseholdConfig::from_toml_file`] or use [`HouseholdConfig::default`]
/// for plain presets with zero unit cost.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseholdConfig {
    /// Unit cost and billing days.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Presentation options.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Edits applied on top of the preset catalog, in file order.
    #[serde(default, rename = "device")]
    pub devices: Vec<DeviceOverride>,
}

/// Calculation parameters as raw input.
///
/// Values go through the same coercion as interactive input, so
/// `billing_days_per_month = 0` means 30.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Price per watt-hour.
    pub unit_cost: FieldValue,
    /// Days per billing month.
    pub billing_days_per_month: FieldValue,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let defaults = AggregationParameters::default();
        Self {
            unit_cost: defaults.unit_cost.into(),
            billing_days_per_month: defaults.billing_days_per_month.into(),
        }
    }
}

impl PricingConfig {
    pub fn parameters(&self) -> AggregationParameters {
        AggregationParameters::from_inputs(
            self.unit_cost.clone(),
            self.billing_days_per_month.clone(),
        )
    }
}

/// Presentation options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Currency label appended to cost figures.
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Override for one preset device, addressed by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceOverride {
    /// Preset id (e.g. `"fan"`).
    pub id: String,
    pub enabled: Option<bool>,
    pub watts: Option<FieldValue>,
    pub hours_per_day: Option<FieldValue>,
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"device[2].id"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl HouseholdConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Numeric values are never rejected (they are coerced); only
    /// structural problems are reported.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.display.currency.trim().is_empty() {
            errors.push(ConfigError {
                field: "display.currency".into(),
                message: "must not be empty".into(),
            });
        }

        for (i, d) in self.devices.iter().enumerate() {
            if catalog::find(&d.id).is_none() {
                errors.push(ConfigError {
                    field: format!("device[{i}].id"),
                    message: format!("unknown device \"{}\"", d.id),
                });
            }
        }

        errors
    }

    /// Edits that turn the preset registry into this household.
    ///
    /// Overrides with an unknown id are skipped.
    pub fn edits(&self, registry: &Registry) -> Vec<DeviceEdit> {
        let mut edits = Vec::new();
        for d in &self.devices {
            let Some(index) = registry.position(&d.id) else {
                debug!(id = %d.id, "skipping override for unknown device");
                continue;
            };
            if let Some(enabled) = d.enabled {
                edits.push(DeviceEdit::new(index, DeviceField::Enabled(enabled)));
            }
            if let Some(watts) = &d.watts {
                edits.push(DeviceEdit::new(index, DeviceField::Watts(watts.clone())));
            }
            if let Some(hours) = &d.hours_per_day {
                edits.push(DeviceEdit::new(
                    index,
                    DeviceField::HoursPerDay(hours.clone()),
                ));
            }
        }
        edits
    }

    /// Builds a session: presets plus overrides, with the configured pricing.
    pub fn session(&self) -> Session {
        let mut registry = Registry::new();
        for edit in self.edits(&registry) {
            registry.apply(&edit);
        }
        Session::with_registry(registry, self.pricing.parameters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        let cfg = HouseholdConfig::default();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "default should be valid: {errors:?}");
        assert_eq!(cfg.display.currency, "COP");
        assert_eq!(cfg.pricing.parameters(), AggregationParameters::default());
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[pricing]
unit_cost = 0.85
billing_days_per_month = 31

[display]
currency = "EUR"

[[device]]
id = "fan"
enabled = false

[[device]]
id = "tv"
watts = "120"
hours_per_day = 3
"#;
        let cfg = HouseholdConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(
            cfg.as_ref().map(|c| c.pricing.parameters()),
            Some(AggregationParameters::new(0.85, 31.0))
        );
        assert_eq!(cfg.as_ref().map(|c| c.devices.len()), Some(2));
        assert_eq!(cfg.as_ref().map(|c| &*c.display.currency), Some("EUR"));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[pricing]
unit_cost = 1
bogus_field = true
"#;
        assert!(HouseholdConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_unknown_device() {
        let toml = r#"
[[device]]
id = "toaster"
enabled = true
"#;
        let cfg = HouseholdConfig::from_toml_str(toml).expect("toml should parse");
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "device[0].id"));
    }

    #[test]
    fn validation_catches_empty_currency() {
        let mut cfg = HouseholdConfig::default();
        cfg.display.currency = "  ".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "display.currency"));
    }

    #[test]
    fn garbage_pricing_is_coerced() {
        let toml = r#"
[pricing]
unit_cost = "cheap"
billing_days_per_month = 0
"#;
        let cfg = HouseholdConfig::from_toml_str(toml).expect("toml should parse");
        assert_eq!(cfg.pricing.parameters(), AggregationParameters::default());
    }

    #[test]
    fn session_applies_overrides() {
        let toml = r#"
[pricing]
unit_cost = 0.5

[[device]]
id = "fan"
enabled = false

[[device]]
id = "tv"
watts = "oops"
"#;
        let cfg = HouseholdConfig::from_toml_str(toml).expect("toml should parse");
        let session = cfg.session();
        let registry = session.registry();
        let fan = registry.position("fan").and_then(|i| registry.get(i));
        let tv = registry.position("tv").and_then(|i| registry.get(i));
        assert_eq!(fan.map(|r| r.enabled), Some(false));
        assert_eq!(tv.map(|r| r.watts), Some(0.0));
        assert_eq!(session.params().unit_cost, 0.5);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = HouseholdConfig::from_toml_str("[display]\ncurrency = \"USD\"\n")
            .expect("toml should parse");
        assert_eq!(cfg.pricing.parameters().billing_days_per_month, 30.0);
        assert!(cfg.devices.is_empty());
    }
}
