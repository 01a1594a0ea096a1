use std::collections::BTreeMap;

use patmap_model::{MappedRecord, OutputDocument, ResolvedValue};
use patmap_output::{OutputError, render_document, write_document};

fn sample_document() -> OutputDocument {
    let mut address = BTreeMap::new();
    address.insert("city".to_string(), ResolvedValue::from(""));
    address.insert("street".to_string(), ResolvedValue::from(""));

    let mut record = MappedRecord::new();
    record.insert("patient_id".to_string(), ResolvedValue::Integer(12345));
    record.insert("full_name".to_string(), ResolvedValue::from("John Doe"));
    record.insert("age".to_string(), ResolvedValue::Integer(-1));
    record.insert("address".to_string(), ResolvedValue::Object(address));
    OutputDocument::new(vec![record])
}

#[test]
fn renders_pretty_json_with_two_space_indent() {
    let rendered = render_document(&sample_document()).unwrap();
    insta::assert_snapshot!(rendered, @r#"
    {
      "patients": [
        {
          "address": {
            "city": "",
            "street": ""
          },
          "age": -1,
          "full_name": "John Doe",
          "patient_id": 12345
        }
      ]
    }
    "#);
}

#[test]
fn write_document_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("output.json");
    let rendered = render_document(&sample_document()).unwrap();

    write_document(&path, &rendered).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, rendered);
    let round: OutputDocument = serde_json::from_str(&written).unwrap();
    assert_eq!(round, sample_document());
}

#[test]
fn write_document_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be overwritten with a file.
    let result = write_document(dir.path(), "{}");
    assert!(matches!(result, Err(OutputError::Write { .. })));
}
