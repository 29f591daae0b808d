//! Household device records, the preset catalog and the live registry.

/// Built-in preset appliances.
pub mod catalog;
/// Editable device list and mutation dispatch.
pub mod registry;
pub mod types;

// Re-export the main types for convenience
pub use registry::{DeviceEdit, DeviceField, Registry};
pub use types::DeviceRecord;
pub use types::FieldValue;
