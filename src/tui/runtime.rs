//! TUI application state: selection, inline editing and the calculator
//! session behind it.

use crate::calc::AggregationParameters;
use crate::devices::{DeviceEdit, DeviceField, FieldValue};
use crate::session::Session;

/// Field being edited in the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Watts of the device at this index.
    Watts(usize),
    /// Hours per day of the device at this index.
    Hours(usize),
    UnitCost,
    BillingDays,
}

impl EditTarget {
    pub fn label(self) -> &'static str {
        match self {
            Self::Watts(_) => "W",
            Self::Hours(_) => "h/day",
            Self::UnitCost => "Cost per Wh",
            Self::BillingDays => "Days per month",
        }
    }
}

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Typing into a field; `buffer` holds the raw text.
    Editing { target: EditTarget, buffer: String },
}

/// TUI application state.
pub struct App {
    /// Registry, parameters and last result.
    pub session: Session,
    /// Currency label for cost figures.
    pub currency: String,
    /// Highlighted device row.
    pub selected: usize,
    pub mode: Mode,
    /// Unit cost exactly as typed; coerced on calculate.
    pub unit_cost_input: String,
    /// Billing days exactly as typed; coerced on calculate.
    pub days_input: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app over an existing session.
    pub fn new(session: Session, currency: &str) -> Self {
        let params = *session.params();
        Self {
            session,
            currency: currency.to_string(),
            selected: 0,
            mode: Mode::Browse,
            unit_cost_input: format_input(params.unit_cost, ""),
            days_input: format_input(params.billing_days_per_month, "30"),
            quit: false,
        }
    }

    pub fn device_count(&self) -> usize {
        self.session.registry().len()
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.device_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flips the `enabled` flag of the highlighted device.
    pub fn toggle_selected(&mut self) {
        let Some(enabled) = self.session.registry().get(self.selected).map(|r| r.enabled) else {
            return;
        };
        self.session.apply(&DeviceEdit::new(
            self.selected,
            DeviceField::Enabled(!enabled),
        ));
    }

    /// Opens the input line for `target`, prefilled with its current value.
    pub fn begin_edit(&mut self, target: EditTarget) {
        let registry = self.session.registry();
        let buffer = match target {
            EditTarget::Watts(i) => registry.get(i).map(|r| r.watts.to_string()),
            EditTarget::Hours(i) => registry.get(i).map(|r| r.hours_per_day.to_string()),
            EditTarget::UnitCost => Some(self.unit_cost_input.clone()),
            EditTarget::BillingDays => Some(self.days_input.clone()),
        };
        if let Some(buffer) = buffer {
            self.mode = Mode::Editing { target, buffer };
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Mode::Editing { buffer, .. } = &mut self.mode {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Mode::Editing { buffer, .. } = &mut self.mode {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Writes the input line back to its field.
    ///
    /// Device fields are coerced immediately; parameters keep the raw text
    /// until the next calculation.
    pub fn commit_edit(&mut self) {
        let Mode::Editing { target, buffer } = std::mem::replace(&mut self.mode, Mode::Browse)
        else {
            return;
        };
        match target {
            EditTarget::Watts(i) => {
                self.session
                    .apply(&DeviceEdit::new(i, DeviceField::Watts(buffer.into())));
            }
            EditTarget::Hours(i) => {
                self.session
                    .apply(&DeviceEdit::new(i, DeviceField::HoursPerDay(buffer.into())));
            }
            EditTarget::UnitCost => self.unit_cost_input = buffer,
            EditTarget::BillingDays => self.days_input = buffer,
        }
    }

    /// Coerces the parameter inputs and runs a calculation.
    pub fn calculate(&mut self) {
        let params = AggregationParameters::from_inputs(
            FieldValue::from(self.unit_cost_input.as_str()),
            FieldValue::from(self.days_input.as_str()),
        );
        self.session.set_parameters(params);
        self.session.calculate();
    }

    /// Restores presets, clears parameter inputs and the last result.
    pub fn reset(&mut self) {
        self.session.reset();
        self.mode = Mode::Browse;
        self.selected = 0;
        self.unit_cost_input.clear();
        self.days_input = "30".to_string();
    }
}

fn format_input(value: f64, zero: &str) -> String {
    if value == 0.0 {
        zero.to_string()
    } else {
        value.to_string()
    }
}
