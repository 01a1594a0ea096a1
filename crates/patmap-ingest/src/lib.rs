//! Input collaborators for the mapping engine.
//!
//! - **patients**: reads the patient XML document and adapts each record to a
//!   [`FlatRecordMap`](patmap_model::FlatRecordMap)
//! - **config**: loads the mapping rule tree from its JSON configuration

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod patients;

pub use config::{load_mapping_config, parse_mapping_config, unknown_transforms};
pub use error::{IngestError, Result};
pub use patients::{
    Address, FIELD_CITY, FIELD_DATE_OF_BIRTH, FIELD_FIRST_NAME, FIELD_ID, FIELD_LAST_NAME,
    FIELD_STATE, FIELD_STREET, KNOWN_FIELDS, PatientRecord, load_patients, parse_patients,
};
