use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{PhotoFile, StoredAsset};

/// Untrusted form fields, exactly as read from the host form.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub photos: Vec<PhotoFile>,
}

/// A submission that passed validation.
///
/// Only the validator constructs this. `name` and `email` are trimmed and
/// non-empty; the photo count and sizes are within the configured limits
/// before any network call happens.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub photos: Vec<PhotoFile>,
}

/// Payload appended to the ledger once every upload has succeeded.
///
/// Built exactly once per submission attempt and sent verbatim. The
/// timestamp serializes as RFC 3339.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub images: Vec<StoredAsset>,
}

impl SubmissionRecord {
    /// Build the record from a validated request and its stored assets.
    pub fn new(
        request: &SubmissionRequest,
        images: Vec<StoredAsset>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            category: request.category.clone(),
            message: request.message.clone(),
            timestamp,
            images,
        }
    }
}

/// Acknowledgment from the ledger endpoint, with the server-supplied
/// message when one was present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerAck {
    pub message: Option<String>,
}
