//! HTTP client for the transformation service.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use shift_model::Table;

use crate::error::TransformError;
use crate::protocol::{TransformRequest, TransformResponse};

/// Matches the upstream service's worst-case generation time.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// One client per service base URL. Requests are sent one at a time;
/// a failure is surfaced once and the caller re-triggers.
#[derive(Debug, Clone)]
pub struct TransformClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransformClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransformError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransformError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send the current table and instruction; on success the returned
    /// table replaces the caller's current table wholesale. The
    /// optional second value is the service's status message.
    pub async fn process(
        &self,
        table: &Table,
        instruction: &str,
    ) -> Result<(Table, Option<String>), TransformError> {
        let url = format!("{}/process-text/", self.base_url);
        let request = TransformRequest::new(table, instruction);
        debug!(
            url,
            headers = request.headers.len(),
            rows = request.data.len(),
            "sending transformation request"
        );

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = error_detail(response).await;
            return Err(TransformError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let payload: TransformResponse = response.json().await?;
        let message = payload.message.clone();
        let replacement = payload.into_table(&table.headers)?;
        info!(
            rows = replacement.rows.len(),
            headers = replacement.headers.len(),
            "transformation applied"
        );
        Ok((replacement, message))
    }

    /// Probe the service's health endpoint (`GET <base>/`).
    pub async fn health(&self) -> Result<(), TransformError> {
        let url = format!("{}/", self.base_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = error_detail(response).await;
            return Err(TransformError::Service {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

/// Best-effort extraction of the service's own failure description:
/// prefer `detail`, then `error`, then the raw body text.
async fn error_detail(response: reqwest::Response) -> String {
    let fallback = "the service returned no failure detail".to_string();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<Value>(&body) {
            Ok(json) => json
                .get("detail")
                .or_else(|| json.get("error"))
                .and_then(Value::as_str)
                .map(ToString::to_string)
                .unwrap_or_else(|| if body.is_empty() { fallback } else { body }),
            Err(_) => {
                if body.is_empty() {
                    fallback
                } else {
                    body
                }
            }
        },
        Err(_) => fallback,
    }
}
