//! Output document assembled from all mapped records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::ResolvedValue;

/// One mapped record: output key to resolved value.
pub type MappedRecord = BTreeMap<String, ResolvedValue>;

/// Top-level output, serialized as `{"patients": [...]}` in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub patients: Vec<MappedRecord>,
}

impl OutputDocument {
    pub fn new(patients: Vec<MappedRecord>) -> Self {
        Self { patients }
    }

    pub fn records(&self) -> &[MappedRecord] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
