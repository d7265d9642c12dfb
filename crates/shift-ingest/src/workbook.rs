//! Workbook decoding: first sheet only, array-of-arrays, every cell
//! coerced to its formatted text. Raw numeric, boolean, and date cell
//! types never leak past this module.

use std::io::Cursor;

use calamine::{Data, DataType, Range, Reader, Xls, Xlsx};

use crate::error::IngestError;
use crate::normalize::RawTable;
use crate::source::WorkbookKind;

pub(crate) fn decode_workbook(
    file_name: &str,
    kind: WorkbookKind,
    bytes: &[u8],
) -> Result<RawTable, IngestError> {
    let range = match kind {
        WorkbookKind::Xlsx => {
            let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
                .map_err(|error| IngestError::parse(file_name, error))?;
            first_sheet_range(file_name, &mut workbook)?
        }
        WorkbookKind::Xls => {
            let mut workbook: Xls<_> = Xls::new(Cursor::new(bytes))
                .map_err(|error| IngestError::parse(file_name, error))?;
            first_sheet_range(file_name, &mut workbook)?
        }
    };

    let Some(range) = range else {
        // A workbook with no sheets decodes to nothing; the normalizer
        // turns that into the empty-or-unparseable outcome.
        return Ok(RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    };

    let mut rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    let headers = if rows.is_empty() {
        Vec::new()
    } else {
        rows.remove(0)
    };

    Ok(RawTable { headers, rows })
}

fn first_sheet_range<RS, R>(
    file_name: &str,
    workbook: &mut R,
) -> Result<Option<Range<Data>>, IngestError>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => Ok(Some(range)),
        Some(Err(error)) => Err(IngestError::parse(file_name, error)),
        None => Ok(None),
    }
}

/// Formatted text for one cell; empty cells become the empty string.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other
            .as_string()
            .unwrap_or_else(|| other.to_string()),
    }
}
