use engagement_helpers::file_ops::{file_type_of, parse_file_type, remove_temp_file};
use engagement_helpers::FileType;
use std::fs;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_parse_file_type_known_extensions() {
    assert_eq!(parse_file_type(Some("xls")), FileType::Excel);
    assert_eq!(parse_file_type(Some("XLSX")), FileType::Excel);
    assert_eq!(parse_file_type(Some("doc")), FileType::Word);
    assert_eq!(parse_file_type(Some("Docx")), FileType::Word);
    assert_eq!(parse_file_type(Some("pdf")), FileType::Pdf);
    assert_eq!(parse_file_type(Some(".csv")), FileType::Csv);
}

#[test]
fn test_parse_file_type_fallbacks() {
    assert_eq!(parse_file_type(None), FileType::Other);
    assert_eq!(parse_file_type(Some("")), FileType::Other);
    assert_eq!(parse_file_type(Some("png")), FileType::Other);
}

#[test]
fn test_file_type_of_path() {
    assert_eq!(file_type_of("uploads/ledger.final.XLSX"), FileType::Excel);
    assert_eq!(file_type_of("uploads/README"), FileType::Other);
}

#[test]
fn test_remove_temp_file_deletes_after_timeout() {
    crate::common::setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("export.csv");
    fs::write(&path, b"a,b\n1,2\n").unwrap();

    remove_temp_file(&path, Duration::from_millis(300));
    assert!(path.exists(), "file removed before timeout");

    let mut waited = Duration::ZERO;
    while path.exists() && waited < Duration::from_secs(5) {
        thread::sleep(Duration::from_millis(50));
        waited += Duration::from_millis(50);
    }
    assert!(!path.exists());
}

#[test]
fn test_remove_temp_file_ignores_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never-created.tmp");

    remove_temp_file(&path, Duration::ZERO);
    thread::sleep(Duration::from_millis(100));
    assert!(!path.exists());
}
