use thiserror::Error;

/// Failure kinds of the parse operation. Each is terminal for the file
/// that produced it; none is retried.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Extension not recognized. Decided before any content is read.
    #[error("unsupported file type: {file_name} (upload a .csv, .xlsx, or .xls file)")]
    UnsupportedFormat { file_name: String },

    /// The raw byte read itself failed.
    #[error("error reading {file_name}: {source}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The decoder rejected the content.
    #[error("error parsing {file_name}: {message}")]
    Parse { file_name: String, message: String },

    /// Parsing succeeded mechanically but produced neither headers nor
    /// rows. User-correctable: the fix is uploading a different file.
    #[error("{file_name} is empty or could not be parsed properly")]
    EmptyTable { file_name: String },
}

impl IngestError {
    pub(crate) fn parse(file_name: &str, cause: impl std::fmt::Display) -> Self {
        IngestError::Parse {
            file_name: file_name.to_string(),
            message: cause.to_string(),
        }
    }
}
