//! File-to-table normalization.
//!
//! Takes the raw bytes of a tabular file (CSV, XLSX, or XLS) and produces
//! the uniform [`Table`] the rest of the system works with: an ordered
//! header list plus rows keyed by header, every cell coerced to text.
//! Parsing is all-or-nothing; a failure never yields a partial table.

use std::path::Path;

use shift_model::Table;

pub mod error;
pub mod source;

mod delimited;
mod normalize;
mod workbook;

pub use error::IngestError;
pub use source::{SourceFormat, WorkbookKind};

/// Parse a file's raw contents into a table.
///
/// The format is decided once from the file name before the bytes are
/// touched; an unrecognized extension fails without reading anything.
pub fn parse_bytes(file_name: &str, bytes: &[u8]) -> Result<Table, IngestError> {
    let format = resolve_format(file_name)?;
    decode(format, file_name, bytes)
}

/// Parse a file on disk into a table.
///
/// Dispatch happens on the file name first, so an unsupported extension
/// is rejected before the file is opened.
pub fn parse_file(path: &Path) -> Result<Table, IngestError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    let format = resolve_format(&file_name)?;
    let bytes = std::fs::read(path).map_err(|source| IngestError::Read {
        file_name: file_name.clone(),
        source,
    })?;
    decode(format, &file_name, &bytes)
}

fn resolve_format(file_name: &str) -> Result<SourceFormat, IngestError> {
    SourceFormat::from_file_name(file_name).ok_or_else(|| IngestError::UnsupportedFormat {
        file_name: file_name.to_string(),
    })
}

fn decode(format: SourceFormat, file_name: &str, bytes: &[u8]) -> Result<Table, IngestError> {
    let raw = match format {
        SourceFormat::Csv => delimited::decode_csv(file_name, bytes)?,
        SourceFormat::Spreadsheet(kind) => workbook::decode_workbook(file_name, kind, bytes)?,
    };
    let table = normalize::finish(file_name, raw)?;
    tracing::debug!(
        file_name,
        format = format.label(),
        headers = table.headers.len(),
        rows = table.rows.len(),
        "parsed table"
    );
    Ok(table)
}
