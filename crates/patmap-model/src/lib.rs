//! Data model for configuration-driven patient record mapping.
//!
//! - **rule**: the mapping rule tree loaded from the JSON configuration
//! - **record**: one source record reduced to flat field name/value pairs
//! - **value**: typed values produced by resolving a rule against a record
//! - **document**: the aggregate output written as `{"patients": [...]}`

pub mod document;
pub mod record;
pub mod rule;
pub mod value;

pub use document::{MappedRecord, OutputDocument};
pub use record::FlatRecordMap;
pub use rule::{MappingConfig, MappingRule};
pub use value::{INVALID_AGE, ResolvedValue};

/// Placeholder used in diagnostics when raw field values must not be logged.
pub const REDACTED_VALUE: &str = "[REDACTED]";
