use std::collections::BTreeMap;

/// One data row: header name to text value. Covers exactly the header
/// list of the table it belongs to once the table is constructed.
pub type Record = BTreeMap<String, String>;

/// The uniform table every parsed file is converted into and every
/// transformation result is converted back into.
///
/// Invariants, established at construction:
/// - `headers` contains no duplicate names (first occurrence wins),
/// - every row's key set equals `headers` exactly,
/// - every cell value is text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl Table {
    pub fn empty() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Build a table from positional rows (cells addressed by column
    /// index), zipping each row against the header list. Cells past the
    /// end of a row become empty strings; cells past the end of the
    /// header list are dropped.
    pub fn from_positional_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let kept = dedup_headers(headers);
        let rows = rows
            .into_iter()
            .map(|row| {
                kept.iter()
                    .map(|(name, idx)| {
                        let value = row.get(*idx).cloned().unwrap_or_default();
                        (name.clone(), value)
                    })
                    .collect()
            })
            .collect();
        Self {
            headers: kept.into_iter().map(|(name, _)| name).collect(),
            rows,
        }
    }

    /// Build a table from keyed records, repairing each row against the
    /// header list: missing keys become empty strings, keys outside the
    /// header list are dropped.
    pub fn from_records(headers: Vec<String>, records: Vec<Record>) -> Self {
        let kept = dedup_headers(headers);
        let rows = records
            .into_iter()
            .map(|mut record| {
                kept.iter()
                    .map(|(name, _)| {
                        let value = record.remove(name).unwrap_or_default();
                        (name.clone(), value)
                    })
                    .collect()
            })
            .collect();
        Self {
            headers: kept.into_iter().map(|(name, _)| name).collect(),
            rows,
        }
    }

    /// True when the table carries neither headers nor rows. A table
    /// with headers but zero data rows is not empty in this sense.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell lookup in header order; absent keys read as empty.
    pub fn cell<'a>(&'a self, row: usize, header: &str) -> &'a str {
        self.rows
            .get(row)
            .and_then(|r| r.get(header))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Deduplicate header names, keeping the first occurrence of each name
/// together with its original column index. Later duplicates are
/// dropped, so the first column bearing a name supplies its cells.
fn dedup_headers(headers: Vec<String>) -> Vec<(String, usize)> {
    let mut kept: Vec<(String, usize)> = Vec::with_capacity(headers.len());
    for (idx, name) in headers.into_iter().enumerate() {
        if !kept.iter().any(|(existing, _)| *existing == name) {
            kept.push((name, idx));
        }
    }
    kept
}
