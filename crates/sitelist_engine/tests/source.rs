use std::fs;

use pretty_assertions::assert_eq;
use sitelist_engine::{read_lines, SourceError};
use tempfile::TempDir;

#[test]
fn lines_are_numbered_from_one_in_file_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vod.list");
    fs::write(&path, "定制源\nalpha: http://a.example\n\nbeta http://b.example\n").unwrap();

    let lines = read_lines(&path).unwrap();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].number, 1);
    assert_eq!(lines[0].text, "定制源");
    assert_eq!(lines[2].text, "");
    assert_eq!(lines[3].number, 4);
    assert_eq!(lines[3].text, "beta http://b.example");
}

#[test]
fn missing_file_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.list");

    let err = read_lines(&path).unwrap_err();
    assert!(matches!(err, SourceError::NotFound(_)));
}

#[test]
fn non_utf8_bytes_report_a_decode_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("binary.list");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let err = read_lines(&path).unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}
