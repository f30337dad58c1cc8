use std::fs;

use pretty_assertions::assert_eq;
use serde_json::json;
use sitelist_engine::{load_document, save_document, StoreError};
use tempfile::TempDir;

#[test]
fn save_then_load_round_trips_the_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("export.json");
    let document = json!({"sites": [], "total": 0, "owner": "x"});

    save_document(&path, &document).unwrap();
    let loaded = load_document(&path).unwrap();

    assert_eq!(loaded, document);
}

#[test]
fn save_writes_pretty_json_with_unescaped_text_and_trailing_newline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("export.json");
    save_document(&path, &json!({"name": "站点A"})).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n  \"name\": \"站点A\"\n}\n");
}

#[test]
fn save_replaces_an_existing_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("export.json");
    fs::write(&path, "{\"old\": true}").unwrap();

    save_document(&path, &json!({"new": true})).unwrap();

    assert_eq!(load_document(&path).unwrap(), json!({"new": true}));
}

#[test]
fn failed_save_creates_no_destination_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    // Parent is a regular file, so the temp file cannot be created there.
    let target = blocker.join("export.json");
    let result = save_document(&target, &json!({}));

    assert!(result.is_err());
    assert!(!target.exists());
}

#[test]
fn missing_document_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_document(&temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn malformed_document_reports_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{not json").unwrap();

    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)));
}
