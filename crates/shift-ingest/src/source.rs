/// File format, decided exactly once at the boundary from the filename
/// suffix. The match is case-sensitive: `data.CSV` is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text whose first line is the header row.
    Csv,
    /// Binary workbook, first sheet only, decoded as an array of rows.
    Spreadsheet(WorkbookKind),
}

/// Which workbook container a spreadsheet file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    /// Zip-packaged OOXML workbook.
    Xlsx,
    /// Legacy binary workbook.
    Xls,
}

impl SourceFormat {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.ends_with(".csv") {
            Some(SourceFormat::Csv)
        } else if file_name.ends_with(".xlsx") {
            Some(SourceFormat::Spreadsheet(WorkbookKind::Xlsx))
        } else if file_name.ends_with(".xls") {
            Some(SourceFormat::Spreadsheet(WorkbookKind::Xls))
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceFormat::Csv => "csv",
            SourceFormat::Spreadsheet(WorkbookKind::Xlsx) => "xlsx",
            SourceFormat::Spreadsheet(WorkbookKind::Xls) => "xls",
        }
    }
}
