//! Resolved output values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel produced by `age_from_dob` when the date of birth does not parse.
pub const INVALID_AGE: i64 = -1;

/// Value produced by resolving one mapping rule against one record.
///
/// Serializes untagged: a bare JSON string, number or object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Integer(i64),
    String(String),
    Object(BTreeMap<String, ResolvedValue>),
}

impl ResolvedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResolvedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ResolvedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, ResolvedValue>> {
        match self {
            ResolvedValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedValue::Integer(_) => "integer",
            ResolvedValue::String(_) => "string",
            ResolvedValue::Object(_) => "object",
        }
    }
}

impl From<&str> for ResolvedValue {
    fn from(value: &str) -> Self {
        ResolvedValue::String(value.to_string())
    }
}

impl From<String> for ResolvedValue {
    fn from(value: String) -> Self {
        ResolvedValue::String(value)
    }
}

impl From<i64> for ResolvedValue {
    fn from(value: i64) -> Self {
        ResolvedValue::Integer(value)
    }
}

impl From<BTreeMap<String, ResolvedValue>> for ResolvedValue {
    fn from(value: BTreeMap<String, ResolvedValue>) -> Self {
        ResolvedValue::Object(value)
    }
}
