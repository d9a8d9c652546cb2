//! Client for the spreadsheet-backed ledger endpoint.
//!
//! The endpoint's response contract is loose: depending on the deployment it
//! may answer with clean JSON, with plain text, or not be readable at all.
//! [`LedgerMode`] picks the transport policy; the Verified mode carries the
//! tolerant-response protocol.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use photodrop_core::models::{LedgerAck, SubmissionRecord};
use photodrop_core::{Config, LedgerMode, SubmissionError};

use crate::traits::RecordLedger;

/// Appends submission records to the ledger endpoint.
pub struct LedgerClient {
    http: reqwest::Client,
    url: String,
    mode: LedgerMode,
}

impl LedgerClient {
    pub fn new(url: impl Into<String>, mode: LedgerMode) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client for the ledger endpoint")?;

        Ok(Self {
            http,
            url: url.into(),
            mode,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.ledger_url.clone(), config.ledger_mode)
    }

    async fn append_verified(
        &self,
        record: &SubmissionRecord,
    ) -> Result<LedgerAck, SubmissionError> {
        let response = self
            .http
            .post(&self.url)
            .json(record)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        // Capture the raw text before any interpretation; the content-type
        // header is not trustworthy and the heuristic below needs the
        // original body after a failed parse.
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        interpret_response(&body)
    }

    async fn append_fire_and_forget(
        &self,
        record: &SubmissionRecord,
    ) -> Result<LedgerAck, SubmissionError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| SubmissionError::Transport(format!("failed to encode record: {e}")))?;

        // text/plain keeps the request simple enough that restrictive
        // deployments accept it without a preflight. The response is never
        // read; a dispatched request counts as accepted.
        let response = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        tracing::debug!(status = %response.status(), "Ledger request dispatched");
        Ok(LedgerAck::default())
    }
}

#[async_trait]
impl RecordLedger for LedgerClient {
    async fn append(&self, record: &SubmissionRecord) -> Result<LedgerAck, SubmissionError> {
        tracing::info!(
            mode = %self.mode,
            images = record.images.len(),
            "Appending submission record to ledger"
        );
        match self.mode {
            LedgerMode::Verified => self.append_verified(record).await,
            LedgerMode::FireAndForget => self.append_fire_and_forget(record).await,
        }
    }
}

/// Interpret the raw ledger response body.
///
/// The body is parsed as strict JSON first. A parsed value acknowledges the
/// record only when its `success` member is boolean `true`; anything else is
/// an explicit rejection carrying the server's `message`/`error` text when
/// present. When parsing fails, one fallback heuristic runs: a body
/// containing both `success` and `true` counts as an implicit
/// acknowledgment, otherwise the outcome is ambiguous.
fn interpret_response(body: &str) -> Result<LedgerAck, SubmissionError> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            if value.get("success").and_then(|v| v.as_bool()) == Some(true) {
                let message = value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(str::to_string);
                Ok(LedgerAck { message })
            } else {
                let reason = value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .or_else(|| value.get("error").and_then(|v| v.as_str()))
                    .unwrap_or("the ledger reported a failure")
                    .to_string();
                tracing::warn!(%reason, "Ledger rejected the record");
                Err(SubmissionError::RecordRejected(reason))
            }
        }
        Err(_) => {
            if body.contains("success") && body.contains("true") {
                tracing::warn!("Ledger response was not JSON; accepted via success heuristic");
                Ok(LedgerAck::default())
            } else {
                tracing::error!("Ledger response was not recognizable");
                Err(SubmissionError::ResponseUnparseable {
                    body: body.to_string(),
                })
            }
        }
    }
}
