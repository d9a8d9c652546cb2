//! Error types for the submission pipeline.
//!
//! Every variant is caught at the controller boundary and converted into a
//! terminal `SubmissionOutcome`; none propagate to the host and none are
//! silently dropped.

use crate::validation::ValidationError;

/// Errors produced while driving one submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// User input problem. Recoverable by the user; no network was touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage endpoint rejected or errored on a specific file. The
    /// submission aborts; files after this one are never attempted and
    /// already-uploaded assets are discarded.
    #[error("upload of \"{filename}\" failed with status {status}: {detail}")]
    UploadFailed {
        filename: String,
        status: u16,
        detail: String,
    },

    /// The storage endpoint answered success but the body could not be
    /// decoded into an asset descriptor.
    #[error("storage response could not be decoded: {0}")]
    StorageResponse(String),

    /// Network unreachable at either phase.
    #[error("network error: {0}")]
    Transport(String),

    /// The ledger explicitly reported failure.
    #[error("ledger rejected the submission: {0}")]
    RecordRejected(String),

    /// The ledger response was neither valid JSON nor matched the success
    /// heuristic. Assets are already uploaded; the record may or may not be
    /// stored.
    #[error("unrecognized ledger response")]
    ResponseUnparseable { body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_failure_names_file_and_status() {
        let err = SubmissionError::UploadFailed {
            filename: "beach.jpg".to_string(),
            status: 400,
            detail: "Invalid image file".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("beach.jpg"));
        assert!(text.contains("400"));
    }

    #[test]
    fn validation_errors_pass_through_their_wording() {
        let err = SubmissionError::from(ValidationError::NoPhotosSelected);
        assert_eq!(err.to_string(), ValidationError::NoPhotosSelected.to_string());
    }
}
