use thiserror::Error;

/// Failure kinds of one transformation attempt. None is retried; the
/// user re-triggers after a failure.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The request never completed (connect, timeout, body decode).
    #[error("could not reach the transformation service: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status. The message is
    /// the `detail`/`error` field of the body when one was present.
    #[error("processing failed ({status}): {message}")]
    Service { status: u16, message: String },

    /// The response decoded but lacked the required data field.
    #[error("the service response did not contain a processed_data field")]
    MissingProcessedData,

    /// `processed_data` was present but not a sequence of row records.
    #[error("the service returned processed_data that is not a sequence of row records: {detail}")]
    MalformedProcessedData { detail: String },
}
