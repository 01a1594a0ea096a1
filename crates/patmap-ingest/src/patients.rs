//! Patient XML reading and the flat record adapter.
//!
//! The expected document shape is:
//!
//! ```xml
//! <Patients>
//!   <Patient ID="12345">
//!     <FirstName>John</FirstName>
//!     <LastName>Doe</LastName>
//!     <DateOfBirth>1985-07-15</DateOfBirth>
//!     <Address>                      <!-- optional -->
//!       <Street>1 Main St</Street>
//!       <City>Springfield</City>
//!       <State>IL</State>
//!     </Address>
//!   </Patient>
//! </Patients>
//! ```
//!
//! Missing child elements read as empty strings. Growing the set of source
//! fields is a change to [`PatientRecord::to_flat_record`] only; the mapping
//! engine never sees the XML shape.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use patmap_model::FlatRecordMap;

use crate::error::{IngestError, Result};

pub const FIELD_ID: &str = "ID";
pub const FIELD_FIRST_NAME: &str = "FirstName";
pub const FIELD_LAST_NAME: &str = "LastName";
pub const FIELD_DATE_OF_BIRTH: &str = "DateOfBirth";
pub const FIELD_STREET: &str = "Street";
pub const FIELD_CITY: &str = "City";
pub const FIELD_STATE: &str = "State";

/// Every field name the adapter can produce, in document order.
pub const KNOWN_FIELDS: &[&str] = &[
    FIELD_ID,
    FIELD_FIRST_NAME,
    FIELD_LAST_NAME,
    FIELD_DATE_OF_BIRTH,
    FIELD_STREET,
    FIELD_CITY,
    FIELD_STATE,
];

/// One `<Patient>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    #[serde(rename = "@ID")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: String,
    #[serde(rename = "Address")]
    pub address: Option<Address>,
}

/// Optional nested `<Address>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
}

#[derive(Debug, Default, Deserialize)]
struct PatientsDocument {
    #[serde(rename = "Patient", default)]
    patients: Vec<PatientRecord>,
}

impl PatientRecord {
    /// Reduce this record to the flat field map consumed by the engine.
    ///
    /// Address fields are only present when the record carries an
    /// `<Address>` element.
    pub fn to_flat_record(&self) -> FlatRecordMap {
        let mut record = FlatRecordMap::new();
        record.insert(FIELD_ID, self.id.as_str());
        record.insert(FIELD_FIRST_NAME, self.first_name.as_str());
        record.insert(FIELD_LAST_NAME, self.last_name.as_str());
        record.insert(FIELD_DATE_OF_BIRTH, self.date_of_birth.as_str());
        if let Some(address) = &self.address {
            record.insert(FIELD_STREET, address.street.as_str());
            record.insert(FIELD_CITY, address.city.as_str());
            record.insert(FIELD_STATE, address.state.as_str());
        }
        record
    }
}

/// Parse patient records from an XML string.
pub fn parse_patients(xml: &str) -> Result<Vec<PatientRecord>> {
    let document: PatientsDocument = quick_xml::de::from_str(xml).map_err(IngestError::XmlText)?;
    Ok(document.patients)
}

/// Read and parse the patient XML file at `path`.
pub fn load_patients(path: &Path) -> Result<Vec<PatientRecord>> {
    let xml = fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let document: PatientsDocument =
        quick_xml::de::from_str(&xml).map_err(|source| IngestError::Xml {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        record_count = document.patients.len(),
        "loaded patient records"
    );
    Ok(document.patients)
}
