//! The live, editable device list.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::catalog;
use super::types::{DeviceRecord, FieldValue};
use crate::calc::engine;
use crate::calc::params::AggregationParameters;
use crate::calc::result::AggregationResult;

/// Which field of a device an edit targets, with the new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceField {
    /// Include or exclude the device from aggregation.
    Enabled(bool),
    /// New power draw; coerced on write.
    Watts(FieldValue),
    /// New daily usage; coerced on write.
    HoursPerDay(FieldValue),
}

/// A single mutation request addressed by registry position.
///
/// Every presentation layer funnels its input events through this type and
/// [`Registry::apply`], so the registry does not depend on how rows are
/// rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceEdit {
    pub index: usize,
    pub field: DeviceField,
}

impl DeviceEdit {
    pub fn new(index: usize, field: DeviceField) -> Self {
        Self { index, field }
    }
}

/// Ordered, index-addressable list of device records seeded from the
/// preset catalog.
///
/// # Examples
///
/// ```
/// use energy_calc::devices::Registry;
///
/// let mut registry = Registry::new();
/// let fan = registry.position("fan").unwrap();
/// registry.set_watts(fan, "75");
/// registry.toggle_enabled(fan, false);
///
/// assert_eq!(registry.snapshot()[fan].watts, 75.0);
/// assert!(!registry.snapshot()[fan].enabled);
///
/// registry.reset();
/// assert_eq!(registry.snapshot()[fan].watts, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    records: Vec<DeviceRecord>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry holding fresh copies of the preset catalog.
    pub fn new() -> Self {
        Self {
            records: catalog::preset_records(),
        }
    }

    /// Creates a registry over an explicit record list.
    ///
    /// Numeric fields are sanitized; [`reset`](Self::reset) still restores
    /// the preset catalog.
    pub fn from_records(records: Vec<DeviceRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|mut r| {
                r.watts = super::types::sanitize(r.watts);
                r.hours_per_day = super::types::sanitize(r.hours_per_day);
                r
            })
            .collect();
        Self { records }
    }

    /// Replaces the live list with fresh copies of the preset catalog.
    pub fn initialize(&mut self) {
        self.records = catalog::preset_records();
    }

    /// Discards all edits. Same as [`initialize`](Self::initialize).
    pub fn reset(&mut self) {
        debug!(devices = catalog::PRESETS.len(), "registry reset to presets");
        self.initialize();
    }

    /// Read-only ordered view of the current records.
    pub fn snapshot(&self) -> &[DeviceRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&DeviceRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of the record with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Sets the `enabled` flag. Returns `false` (and changes nothing) when
    /// `index` is out of range.
    pub fn toggle_enabled(&mut self, index: usize, enabled: bool) -> bool {
        self.apply(&DeviceEdit::new(index, DeviceField::Enabled(enabled)))
    }

    /// Stores `value` as the power draw, coercing invalid input to 0.
    pub fn set_watts(&mut self, index: usize, value: impl Into<FieldValue>) -> bool {
        self.apply(&DeviceEdit::new(index, DeviceField::Watts(value.into())))
    }

    /// Stores `value` as the daily usage, coercing invalid input to 0.
    pub fn set_hours(&mut self, index: usize, value: impl Into<FieldValue>) -> bool {
        self.apply(&DeviceEdit::new(
            index,
            DeviceField::HoursPerDay(value.into()),
        ))
    }

    /// Applies one edit. Out-of-range indices are ignored and reported as
    /// `false`; no other record is touched.
    pub fn apply(&mut self, edit: &DeviceEdit) -> bool {
        let len = self.records.len();
        let Some(record) = self.records.get_mut(edit.index) else {
            debug!(index = edit.index, len, "ignoring edit for out-of-range device");
            return false;
        };

        match &edit.field {
            DeviceField::Enabled(enabled) => record.enabled = *enabled,
            DeviceField::Watts(value) => {
                record.watts = value.coerce();
                warn_if_negative(&record.id, "watts", record.watts);
            }
            DeviceField::HoursPerDay(value) => {
                record.hours_per_day = value.coerce();
                warn_if_negative(&record.id, "hours_per_day", record.hours_per_day);
            }
        }
        true
    }

    /// Aggregates the current snapshot.
    pub fn calculate(&self, params: &AggregationParameters) -> AggregationResult {
        engine::calculate(&self.records, params)
    }
}

// Negative input is accepted as typed; only non-numeric input is coerced.
fn warn_if_negative(id: &str, field: &'static str, value: f64) {
    if value < 0.0 {
        warn!(device = id, field, value, "negative value accepted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matches_catalog() {
        let registry = Registry::new();
        assert_eq!(registry.snapshot(), catalog::preset_records().as_slice());
    }

    #[test]
    fn set_watts_parses_text() {
        let mut registry = Registry::new();
        assert!(registry.set_watts(1, "75.5"));
        assert_eq!(registry.snapshot()[1].watts, 75.5);
    }

    #[test]
    fn invalid_input_stores_exact_zero() {
        let mut registry = Registry::new();
        for raw in ["", "abc", "  ", "NaN"] {
            registry.set_watts(2, raw);
            registry.set_hours(2, raw);
            assert_eq!(registry.snapshot()[2].watts, 0.0);
            assert_eq!(registry.snapshot()[2].hours_per_day, 0.0);
        }
    }

    #[test]
    fn negative_numbers_are_stored_as_given() {
        let mut registry = Registry::new();
        registry.set_hours(3, "-2");
        assert_eq!(registry.snapshot()[3].hours_per_day, -2.0);
    }

    #[test]
    fn out_of_range_edit_is_noop() {
        let mut registry = Registry::new();
        let before = registry.clone();
        assert!(!registry.toggle_enabled(999, false));
        assert!(!registry.set_watts(registry.len(), "5"));
        assert!(!registry.set_hours(usize::MAX, "5"));
        assert_eq!(registry, before);

        // subsequent edits still work
        assert!(registry.toggle_enabled(0, true));
        assert!(registry.snapshot()[0].enabled);
    }

    #[test]
    fn disabled_device_keeps_its_values() {
        let mut registry = Registry::new();
        registry.set_watts(4, "65");
        registry.toggle_enabled(4, false);
        let r = &registry.snapshot()[4];
        assert!(!r.enabled);
        assert_eq!(r.watts, 65.0);
        assert_eq!(r.hours_per_day, 6.0);
    }

    #[test]
    fn reset_restores_presets_after_edits() {
        let mut registry = Registry::new();
        registry.set_watts(0, "1");
        registry.set_hours(5, "garbage");
        registry.toggle_enabled(0, true);
        registry.reset();
        assert_eq!(registry, Registry::new());
    }

    #[test]
    fn reset_replaces_injected_records() {
        let mut registry = Registry::from_records(vec![DeviceRecord::new("x", "X", 1.0, 1.0)]);
        assert_eq!(registry.len(), 1);
        registry.reset();
        assert_eq!(registry.len(), catalog::PRESETS.len());
    }

    #[test]
    fn edits_never_touch_catalog() {
        let mut registry = Registry::new();
        registry.set_watts(1, "9999");
        let fan = catalog::find("fan").expect("fan preset exists");
        assert_eq!(fan.watts, 60.0);
        assert_eq!(Registry::new().snapshot()[1].watts, 60.0);
    }

    #[test]
    fn apply_dispatches_by_field() {
        let mut registry = Registry::new();
        let idx = registry.position("tv").expect("tv preset exists");
        registry.apply(&DeviceEdit::new(idx, DeviceField::Watts("120".into())));
        registry.apply(&DeviceEdit::new(idx, DeviceField::HoursPerDay(2.5.into())));
        registry.apply(&DeviceEdit::new(idx, DeviceField::Enabled(false)));
        let tv = &registry.snapshot()[idx];
        assert_eq!((tv.watts, tv.hours_per_day, tv.enabled), (120.0, 2.5, false));
    }
}
