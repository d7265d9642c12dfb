//! Shared post-processing: the embedded table normalizer.
//!
//! Decoders hand over a header list plus positional rows; this module
//! applies the headers-from-data fallback, decides the empty outcome,
//! and delegates the gap-fill/dedup rules to the model crate so the
//! row-keys == header-list invariant holds on everything returned.

use shift_model::Table;

use crate::error::IngestError;

/// What a decoder produces before normalization: headers (possibly
/// empty) and rows addressed by column index.
#[derive(Debug)]
pub(crate) struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn finish(file_name: &str, raw: RawTable) -> Result<Table, IngestError> {
    let RawTable { mut headers, mut rows } = raw;

    // Fallback for header-less input: promote the first data row to the
    // header list. Applied at most once; a promoted row that is itself
    // empty leaves the headers empty rather than consuming more rows.
    if headers.is_empty() && !rows.is_empty() {
        headers = rows.remove(0);
        tracing::debug!(file_name, "derived headers from first data row");
    }

    if headers.is_empty() && rows.is_empty() {
        return Err(IngestError::EmptyTable {
            file_name: file_name.to_string(),
        });
    }

    Ok(Table::from_positional_rows(headers, rows))
}
