//! Wire types exchanged with the transformation service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shift_model::{Record, Table};

use crate::error::TransformError;

/// Request payload: the instruction, the ordered header list, and the
/// full current row set.
#[derive(Debug, Clone, Serialize)]
pub struct TransformRequest {
    pub natural_language_query: String,
    pub headers: Vec<String>,
    pub data: Vec<Record>,
}

impl TransformRequest {
    pub fn new(table: &Table, instruction: impl Into<String>) -> Self {
        Self {
            natural_language_query: instruction.into(),
            headers: table.headers.clone(),
            data: table.rows.clone(),
        }
    }
}

/// Response payload. `processed_data` is required by contract but typed
/// loose here so its absence is our error, not a deserialization one;
/// `headers` optionally replaces the header list.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformResponse {
    #[serde(default)]
    pub processed_data: Option<Value>,
    #[serde(default)]
    pub headers: Option<Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TransformResponse {
    /// Validate the payload and build the replacement table. The
    /// returned rows replace the current table exactly, in order,
    /// re-keyed against the response headers when present and the
    /// previous headers otherwise.
    pub fn into_table(self, current_headers: &[String]) -> Result<Table, TransformError> {
        let value = self
            .processed_data
            .ok_or(TransformError::MissingProcessedData)?;
        let raw: Vec<BTreeMap<String, Value>> =
            serde_json::from_value(value).map_err(|error| {
                TransformError::MalformedProcessedData {
                    detail: error.to_string(),
                }
            })?;
        let records: Vec<Record> = raw
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(key, value)| (key, value_text(value)))
                    .collect()
            })
            .collect();
        let headers = self
            .headers
            .unwrap_or_else(|| current_headers.to_vec());
        Ok(Table::from_records(headers, records))
    }
}

/// Text for one response cell. The table invariant says cells are text,
/// so non-string JSON values are rendered rather than rejected.
fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_table() -> Table {
        Table::from_positional_rows(
            vec!["Name".into(), "Email".into()],
            vec![
                vec!["Alice".into(), "a@x.com".into()],
                vec!["Bob".into(), String::new()],
            ],
        )
    }

    #[test]
    fn request_carries_instruction_headers_and_rows() {
        let request = TransformRequest::new(&current_table(), "redact emails");
        let json = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(json["natural_language_query"], "redact emails");
        assert_eq!(json["headers"][0], "Name");
        assert_eq!(json["data"][0]["Email"], "a@x.com");
        assert_eq!(json["data"][1]["Email"], "");
    }

    #[test]
    fn processed_rows_replace_the_table_in_order() {
        let response: TransformResponse = serde_json::from_str(
            r#"{"processed_data":[
                {"Name":"Alice","Email":"REDACTED"},
                {"Name":"Bob","Email":""}
            ]}"#,
        )
        .expect("deserialize response");
        let table = response
            .into_table(&current_table().headers)
            .expect("valid payload");
        assert_eq!(table.headers, vec!["Name", "Email"]);
        assert_eq!(table.cell(0, "Email"), "REDACTED");
        assert_eq!(table.cell(1, "Name"), "Bob");
        assert_eq!(table.cell(1, "Email"), "");
    }

    #[test]
    fn replacement_headers_rekey_the_rows() {
        let response: TransformResponse = serde_json::from_str(
            r#"{"headers":["Name"],"processed_data":[{"Name":"Alice","Email":"x"}]}"#,
        )
        .expect("deserialize response");
        let table = response
            .into_table(&["Name".into(), "Email".into()])
            .expect("valid payload");
        assert_eq!(table.headers, vec!["Name"]);
        assert!(table.rows[0].get("Email").is_none());
    }

    #[test]
    fn rows_missing_keys_are_gap_filled() {
        let response: TransformResponse =
            serde_json::from_str(r#"{"processed_data":[{"Name":"Alice"}]}"#)
                .expect("deserialize response");
        let table = response
            .into_table(&["Name".into(), "Email".into()])
            .expect("valid payload");
        assert_eq!(table.cell(0, "Email"), "");
    }

    #[test]
    fn non_string_cells_are_rendered_as_text() {
        let response: TransformResponse = serde_json::from_str(
            r#"{"processed_data":[{"Name":42,"Email":null,"Flag":true}]}"#,
        )
        .expect("deserialize response");
        let table = response
            .into_table(&["Name".into(), "Email".into(), "Flag".into()])
            .expect("valid payload");
        assert_eq!(table.cell(0, "Name"), "42");
        assert_eq!(table.cell(0, "Email"), "");
        assert_eq!(table.cell(0, "Flag"), "true");
    }

    #[test]
    fn missing_processed_data_is_a_protocol_violation() {
        let response: TransformResponse =
            serde_json::from_str(r#"{"message":"ok"}"#).expect("deserialize response");
        let error = response
            .into_table(&["Name".into()])
            .expect_err("processed_data is required");
        assert!(matches!(error, TransformError::MissingProcessedData));
    }

    #[test]
    fn stringly_processed_data_is_a_protocol_violation() {
        // The original backend can degrade to returning a raw string
        // when its own substitution breaks the row structure.
        let response: TransformResponse =
            serde_json::from_str(r#"{"processed_data":"[{\"Name\":\"x\"}]"}"#)
                .expect("deserialize response");
        let error = response
            .into_table(&["Name".into()])
            .expect_err("a JSON string is not a row sequence");
        assert!(matches!(
            error,
            TransformError::MalformedProcessedData { .. }
        ));
    }
}
