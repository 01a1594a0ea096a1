use std::io::Write;

use patmap_ingest::{
    FIELD_DATE_OF_BIRTH, FIELD_ID, FIELD_LAST_NAME, IngestError, load_patients, parse_patients,
};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Patients>
    <Patient ID="12345">
        <FirstName>John</FirstName>
        <LastName>Doe</LastName>
        <DateOfBirth>1985-07-15</DateOfBirth>
    </Patient>
    <Patient ID="67890">
        <FirstName>Jane</FirstName>
        <LastName>Smith</LastName>
        <DateOfBirth>1992-03-22</DateOfBirth>
        <Address>
            <Street>1 Main St</Street>
            <City>Springfield</City>
            <State>IL</State>
        </Address>
    </Patient>
</Patients>
"#;

#[test]
fn parses_patients_in_document_order() {
    let patients = parse_patients(SAMPLE).expect("parse sample");

    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].id, "12345");
    assert_eq!(patients[0].first_name, "John");
    assert_eq!(patients[0].date_of_birth, "1985-07-15");
    assert!(patients[0].address.is_none());
    assert_eq!(patients[1].id, "67890");
    let address = patients[1].address.as_ref().expect("address");
    assert_eq!(address.city, "Springfield");
}

#[test]
fn missing_child_elements_read_as_empty() {
    let xml = r#"<Patients><Patient ID="1"><FirstName>Solo</FirstName></Patient></Patients>"#;
    let patients = parse_patients(xml).expect("parse");
    let record = patients[0].to_flat_record();

    assert_eq!(record.get_or_empty(FIELD_ID), "1");
    assert_eq!(record.get_or_empty(FIELD_LAST_NAME), "");
    assert_eq!(record.get_or_empty(FIELD_DATE_OF_BIRTH), "");
}

#[test]
fn empty_document_yields_no_records() {
    let patients = parse_patients("<Patients></Patients>").expect("parse");
    assert!(patients.is_empty());
}

#[test]
fn malformed_xml_is_an_error() {
    let result = parse_patients("<Patients><Patient ID=\"1\"></Patients>");
    assert!(matches!(result, Err(IngestError::XmlText(_))));
}

#[test]
fn load_patients_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let patients = load_patients(file.path()).expect("load");
    assert_eq!(patients.len(), 2);
}

#[test]
fn load_patients_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("input.xml");

    match load_patients(&missing) {
        Err(IngestError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn patients_interleaved_with_other_elements_are_collected() {
    let xml = r#"<Patients>
        <Patient ID="1"><FirstName>Ann</FirstName></Patient>
        <Note>batch 7</Note>
        <Patient ID="2"><FirstName>Bob</FirstName></Patient>
        <Note/>
        <Patient ID="3"><FirstName>Cy</FirstName></Patient>
    </Patients>"#;

    let patients = parse_patients(xml).expect("parse interleaved");

    let ids: Vec<&str> = patients.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(patients[1].first_name, "Bob");
}
