//! CSV decoding: first line is the header row, headers trimmed, blank
//! lines skipped, no type inference. Cell values are kept verbatim.

use csv::ReaderBuilder;

use crate::error::IngestError;
use crate::normalize::RawTable;

pub(crate) fn decode_csv(file_name: &str, bytes: &[u8]) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::parse(file_name, error))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::parse(file_name, error))?;
        // A blank line decodes as a single empty field; drop it so empty
        // lines never become empty rows. A line of separators (",,") is
        // a real row and is kept.
        if record.len() <= 1 && record.get(0).unwrap_or("").is_empty() {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Strip surrounding whitespace and any UTF-8 BOM from a header name.
fn normalize_header(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_is_split_and_trimmed() {
        let raw = decode_csv("t.csv", b" Name , Email\nAlice,a@x.com\n").expect("decode");
        assert_eq!(raw.headers, vec!["Name", "Email"]);
        assert_eq!(raw.rows, vec![vec!["Alice".to_string(), "a@x.com".to_string()]]);
    }

    #[test]
    fn bom_is_stripped_from_the_first_header() {
        let raw = decode_csv("t.csv", "\u{feff}Name,Email\n".as_bytes()).expect("decode");
        assert_eq!(raw.headers, vec!["Name", "Email"]);
    }

    #[test]
    fn blank_lines_produce_no_rows_but_separator_lines_do() {
        let raw = decode_csv("t.csv", b"A,B\n\n1,2\n\n,,\n").expect("decode");
        assert_eq!(raw.rows.len(), 2);
        assert_eq!(raw.rows[0], vec!["1", "2"]);
        assert_eq!(raw.rows[1], vec!["", "", ""]);
    }

    #[test]
    fn cell_values_are_not_trimmed_or_typed() {
        let raw = decode_csv("t.csv", b"A,B\n 007 ,true\n").expect("decode");
        assert_eq!(raw.rows[0], vec![" 007 ", "true"]);
    }

    #[test]
    fn short_and_long_rows_survive_decoding() {
        let raw = decode_csv("t.csv", b"A,B,C\n1\n1,2,3,4\n").expect("decode");
        assert_eq!(raw.rows[0], vec!["1"]);
        assert_eq!(raw.rows[1], vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let result = decode_csv("t.csv", b"A,B\n\xff\xfe,2\n");
        assert!(matches!(result, Err(IngestError::Parse { .. })));
    }
}
