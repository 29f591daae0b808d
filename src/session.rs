//! Calculator session: the registry, the current parameters and the last
//! calculation, with the reset lifecycle the presentation layers share.

use tracing::debug;

use crate::calc::{AggregationParameters, AggregationResult};
use crate::devices::{DeviceEdit, DeviceRecord, Registry};

/// Owned calculator state.
///
/// Lifecycle: `new -> (apply | set_parameters)* -> calculate -> ... -> reset`.
/// The stored result is a snapshot of the last [`calculate`](Self::calculate)
/// call and is not refreshed by later edits.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    params: AggregationParameters,
    last_result: Option<AggregationResult>,
}

impl Session {
    /// Creates a session seeded from the preset catalog with default
    /// parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing registry.
    pub fn with_registry(registry: Registry, params: AggregationParameters) -> Self {
        Self {
            registry,
            params,
            last_result: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn snapshot(&self) -> &[DeviceRecord] {
        self.registry.snapshot()
    }

    pub fn params(&self) -> &AggregationParameters {
        &self.params
    }

    pub fn set_parameters(&mut self, params: AggregationParameters) {
        self.params = params;
    }

    /// Forwards one edit to the registry.
    pub fn apply(&mut self, edit: &DeviceEdit) -> bool {
        self.registry.apply(edit)
    }

    /// Aggregates the current registry with the current parameters and
    /// keeps the result.
    pub fn calculate(&mut self) -> &AggregationResult {
        let result = self.registry.calculate(&self.params);
        self.last_result.insert(result)
    }

    pub fn last_result(&self) -> Option<&AggregationResult> {
        self.last_result.as_ref()
    }

    /// Restores the preset catalog and default parameters and discards the
    /// last result.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.params = AggregationParameters::default();
        self.last_result = None;
        debug!("session reset");
    }
}
