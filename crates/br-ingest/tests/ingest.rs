//! Integration tests for loading and exporting review documents.

use std::fs;

use br_ingest::{IngestError, load_session, save_session};
use br_model::FeatureId;
use serde_json::{Value, json};
use tempfile::tempdir;

fn producer_document() -> Value {
    json!({
        "id": 1,
        "name": "accession-2020-04",
        "source_path": "/mnt/acquisitions/accession-2020-04",
        "disk_image": false,
        "named_entity_extraction": false,
        "regex_file": null,
        "ssn_mode": 1,
        "files": [
            {
                "id": 1,
                "filename": "letter.txt",
                "filepath": "docs/letter.txt",
                "date_modified": "2019-11-02T10:15:00",
                "date_created": "",
                "note": null,
                "allocated": true,
                "verified": false,
                "inode": "",
                "fs_offset": "",
                "session": 1,
                "feature_count": 1
            }
        ],
        "features": [
            {
                "id": 1,
                "feature_type": "email.txt",
                "forensic_path": "0",
                "offset": null,
                "feature": "someone@example.org",
                "context": "To: someone@example.org",
                "note": null,
                "dismissed": false,
                "file": 1,
                "filepath": "docs/letter.txt"
            }
        ]
    })
}

#[test]
fn load_then_save_preserves_every_value() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("accession.json");
    let output = dir.path().join("accession-reviewed.json");
    fs::write(&input, serde_json::to_vec_pretty(&producer_document()).unwrap()).unwrap();

    let session = load_session(&input).unwrap();
    save_session(&session, &output).unwrap();

    let written: Value = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
    assert_eq!(written, producer_document());
}

#[test]
fn saved_document_loads_again() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("accession.json");
    fs::write(&input, producer_document().to_string()).unwrap();

    let session = load_session(&input).unwrap();
    save_session(&session, &input).unwrap();
    let reloaded = load_session(&input).unwrap();

    assert_eq!(reloaded, session);
    assert_eq!(
        reloaded.feature(FeatureId::new(1)).unwrap().value(),
        Some("someone@example.org")
    );
}

#[test]
fn document_without_features_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "files": [{ "id": 1 }] }"#).unwrap();

    let err = load_session(&path).unwrap_err();
    assert!(matches!(err, IngestError::MalformedDocument { .. }));
    assert!(err.user_message().contains("not a valid review document"));
}

#[test]
fn non_sequential_file_ids_are_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gaps.json");
    fs::write(
        &path,
        r#"{ "features": [], "files": [{ "id": 1 }, { "id": 3 }] }"#,
    )
    .unwrap();

    let err = load_session(&path).unwrap_err();
    assert!(err.to_string().contains("file at position 1 has id 3"));
}
