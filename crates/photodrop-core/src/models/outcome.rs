use crate::error::SubmissionError;

/// Banner wording for a completed submission.
const SUCCESS_MESSAGE: &str =
    "Your photos were uploaded successfully. Thank you for sharing your memories!";
/// Banner wording when storage rejected a file or its response was unusable.
const UPLOAD_FAILED_MESSAGE: &str =
    "We could not upload your photos. Please check the files and try again.";
/// Banner wording for network failures at either phase.
const TRANSPORT_MESSAGE: &str =
    "Connection error. Please check your internet connection and try again.";
/// Banner wording for the ambiguous case: photos are stored but the record
/// may or may not have been written.
const UNPARSEABLE_MESSAGE: &str = "Your photos were uploaded, but we could not confirm your \
     submission was recorded. Please contact the organizer.";

/// Style class applied to the status banner. These are the only two states
/// the banner can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

impl BannerTone {
    /// Class name used by the host page.
    pub fn as_class(&self) -> &'static str {
        match self {
            BannerTone::Success => "success",
            BannerTone::Error => "error",
        }
    }
}

/// Terminal result of one submission attempt.
///
/// Exactly one outcome is produced per attempt. It drives the banner text
/// and tone, and whether the form fields are cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { display_message: String },
    ValidationRejected { display_message: String },
    UploadFailed { display_message: String },
    RecordRejected { display_message: String },
    TransportError { display_message: String },
    ResponseUnparseable { display_message: String },
}

impl SubmissionOutcome {
    /// The outcome of a fully recorded submission.
    pub fn success() -> Self {
        SubmissionOutcome::Success {
            display_message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Message shown in the status banner.
    pub fn display_message(&self) -> &str {
        match self {
            SubmissionOutcome::Success { display_message }
            | SubmissionOutcome::ValidationRejected { display_message }
            | SubmissionOutcome::UploadFailed { display_message }
            | SubmissionOutcome::RecordRejected { display_message }
            | SubmissionOutcome::TransportError { display_message }
            | SubmissionOutcome::ResponseUnparseable { display_message } => display_message,
        }
    }

    pub fn banner_tone(&self) -> BannerTone {
        match self {
            SubmissionOutcome::Success { .. } => BannerTone::Success,
            _ => BannerTone::Error,
        }
    }

    /// Whether the host form's input fields are cleared. Only a fully
    /// recorded submission clears them.
    pub fn clears_fields(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }
}

impl From<SubmissionError> for SubmissionOutcome {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Validation(e) => SubmissionOutcome::ValidationRejected {
                display_message: e.to_string(),
            },
            SubmissionError::UploadFailed { .. } | SubmissionError::StorageResponse(_) => {
                SubmissionOutcome::UploadFailed {
                    display_message: UPLOAD_FAILED_MESSAGE.to_string(),
                }
            }
            SubmissionError::Transport(_) => SubmissionOutcome::TransportError {
                display_message: TRANSPORT_MESSAGE.to_string(),
            },
            SubmissionError::RecordRejected(reason) => SubmissionOutcome::RecordRejected {
                display_message: format!("Your submission could not be recorded: {reason}"),
            },
            SubmissionError::ResponseUnparseable { .. } => SubmissionOutcome::ResponseUnparseable {
                display_message: UNPARSEABLE_MESSAGE.to_string(),
            },
        }
    }
}
