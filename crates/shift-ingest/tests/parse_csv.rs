//! End-to-end CSV parsing against the public API.

use std::fs;
use std::path::PathBuf;

use shift_ingest::{IngestError, parse_bytes, parse_file};

fn temp_file(name: &str, contents: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    (dir, path)
}

#[test]
fn well_formed_csv_yields_headers_and_rekeyed_rows() {
    let table = parse_bytes("people.csv", b"Name,Email\nAlice,a@x.com\nBob,\n").expect("parse");
    assert_eq!(table.headers, vec!["Name", "Email"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, "Name"), "Alice");
    assert_eq!(table.cell(0, "Email"), "a@x.com");
    assert_eq!(table.cell(1, "Name"), "Bob");
    assert_eq!(table.cell(1, "Email"), "");
}

#[test]
fn short_rows_gap_fill_the_trailing_headers() {
    let table = parse_bytes("t.csv", b"A,B,C\n1,2,3\n1\n").expect("parse");
    assert_eq!(table.cell(1, "A"), "1");
    assert_eq!(table.cell(1, "B"), "");
    assert_eq!(table.cell(1, "C"), "");
    // Every row covers exactly the header list.
    for row in &table.rows {
        assert_eq!(row.len(), table.headers.len());
    }
}

#[test]
fn headers_are_trimmed_and_empty_lines_skipped() {
    let table = parse_bytes("t.csv", b" A , B \n\n1,2\n\n\n3,4\n").expect("parse");
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn duplicate_headers_resolve_to_the_first_column() {
    let table = parse_bytes("t.csv", b"Id,Name,Id\n1,Alice,9\n").expect("parse");
    assert_eq!(table.headers, vec!["Id", "Name"]);
    assert_eq!(table.cell(0, "Id"), "1");
}

#[test]
fn parsing_is_idempotent() {
    let bytes: &[u8] = b"A,B\nx,y\n,z\n";
    let first = parse_bytes("t.csv", bytes).expect("first parse");
    let second = parse_bytes("t.csv", bytes).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn zero_byte_file_reports_the_empty_condition() {
    let (_dir, path) = temp_file("empty.csv", b"");
    let error = parse_file(&path).expect_err("empty file must not parse");
    assert!(matches!(error, IngestError::EmptyTable { .. }));
}

#[test]
fn headers_only_file_parses_to_a_zero_row_table() {
    let table = parse_bytes("t.csv", b"A,B\n").expect("parse");
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.row_count(), 0);
    assert!(!table.is_empty());
}

#[test]
fn unsupported_extension_fails_before_any_read() {
    // The path does not exist: reaching the filesystem would surface a
    // read error, so the unsupported-format outcome proves dispatch
    // happened first.
    let missing = PathBuf::from("/nonexistent/data.txt");
    let error = parse_file(&missing).expect_err("txt is not supported");
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn missing_csv_file_is_a_read_failure() {
    let missing = PathBuf::from("/nonexistent/data.csv");
    let error = parse_file(&missing).expect_err("file does not exist");
    assert!(matches!(error, IngestError::Read { .. }));
}

#[test]
fn csv_named_binary_content_is_a_parse_failure() {
    // Extension decides the decoder; a spreadsheet renamed to .csv goes
    // down the CSV path and fails there.
    let error = parse_bytes("sheet.csv", b"PK\x03\x04\xff\xfe\x00binary").expect_err("not csv");
    assert!(matches!(error, IngestError::Parse { .. }));
}
