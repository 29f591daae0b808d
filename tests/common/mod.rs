//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use energy_calc::calc::AggregationParameters;
use energy_calc::devices::{DeviceRecord, Registry};

/// Daily energy of the enabled presets, in Wh.
pub const PRESET_DAILY_WH: f64 = 19_558.0;

/// Monthly energy of the enabled presets at 30 billing days, in Wh.
pub const PRESET_MONTHLY_WH: f64 = PRESET_DAILY_WH * 30.0;

/// Default parameters (unit cost 0, 30 days).
pub fn default_params() -> AggregationParameters {
    AggregationParameters::default()
}

/// Registry with a 100 W / 4 h device and a 60 W / 6 h device.
pub fn two_device_registry() -> Registry {
    Registry::from_records(vec![
        DeviceRecord::new("tv", "TV", 100.0, 4.0),
        DeviceRecord::new("fan", "Fan", 60.0, 6.0),
    ])
}

/// Preset registry with every device in a messy edited state.
pub fn heavily_edited_registry() -> Registry {
    let mut registry = Registry::new();
    for i in 0..registry.len() {
        registry.toggle_enabled(i, i % 2 == 0);
        registry.set_watts(i, format!("{}", i * 17));
        registry.set_hours(i, if i % 3 == 0 { "junk" } else { "1.5" });
    }
    registry
}
