//! Built-in preset catalog of common household appliances.
//!
//! The catalog is a static table; registries own cloned records, so edits
//! never reach it. Changing a preset means changing this file.

use super::types::DeviceRecord;

/// Static seed entry for one preset device.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub watts: f64,
    pub hours_per_day: f64,
    pub enabled: bool,
}

impl Preset {
    const fn on(id: &'static str, name: &'static str, watts: f64, hours_per_day: f64) -> Self {
        Self {
            id,
            name,
            watts,
            hours_per_day,
            enabled: true,
        }
    }

    const fn off(id: &'static str, name: &'static str, watts: f64, hours_per_day: f64) -> Self {
        Self {
            enabled: false,
            ..Self::on(id, name, watts, hours_per_day)
        }
    }

    /// Builds an owned record from this preset.
    pub fn to_record(&self) -> DeviceRecord {
        DeviceRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            watts: self.watts,
            hours_per_day: self.hours_per_day,
            enabled: self.enabled,
        }
    }
}

/// Preset devices in display order.
pub const PRESETS: &[Preset] = &[
    Preset::off("led", "LED bulb", 9.0, 4.0),
    Preset::on("fan", "Ceiling fan", 60.0, 6.0),
    Preset::on("fridge", "Refrigerator (avg)", 150.0, 24.0),
    Preset::on("tv", "TV (LED)", 100.0, 4.0),
    Preset::on("laptop", "Laptop", 50.0, 6.0),
    Preset::on("pc", "Desktop PC", 200.0, 4.0),
    Preset::on("washing", "Washing machine", 500.0, 1.0),
    Preset::on("microwave", "Microwave", 1000.0, 0.25),
    Preset::on("iron", "Iron", 1200.0, 0.5),
    Preset::on("waterheater", "Water heater", 3000.0, 0.5),
    Preset::on("charger", "Phone charger", 6.0, 3.0),
    Preset::on("stereo", "Sound system", 80.0, 2.0),
    Preset::on("dishwasher", "Dishwasher", 1200.0, 0.5),
    Preset::on("oven", "Electric oven", 2000.0, 0.5),
    Preset::on("heater", "Space heater", 1500.0, 1.0),
    Preset::on("ac", "Air conditioner (split)", 1200.0, 6.0),
    Preset::on("pump", "Water pump", 400.0, 1.0),
    Preset::on("router", "Internet router", 10.0, 24.0),
    Preset::on("printer", "Printer", 50.0, 0.2),
    Preset::on("led_strip", "LED strip lights", 24.0, 5.0),
];

/// Returns fresh owned copies of every preset, in catalog order.
pub fn preset_records() -> Vec<DeviceRecord> {
    PRESETS.iter().map(Preset::to_record).collect()
}

/// Looks up a preset by id.
pub fn find(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}
