//! The submission state machine.

use std::sync::Arc;

use chrono::Utc;
use photodrop_core::models::{
    LedgerAck, RawSubmission, SubmissionOutcome, SubmissionRecord, SubmissionRequest,
};
use photodrop_core::{SubmissionError, SubmissionValidator};
use photodrop_client::{AssetUploader, RecordLedger};
use tokio::sync::Mutex;

use crate::surface::{FormSurface, UiState};

/// Busy label while photos upload.
const UPLOADING_LABEL: &str = "Uploading photos...";
/// Busy label while the record is appended to the ledger.
const SAVING_LABEL: &str = "Saving your details...";

/// Drives one submission attempt end to end.
///
/// Phases run in strict sequence: validate, upload, append. The submit
/// control is engaged only after validation passes and is restored on every
/// terminal outcome, whichever phase produced it. The two network phases are
/// the only suspension points; nothing runs concurrently.
pub struct SubmissionController {
    validator: SubmissionValidator,
    uploader: Arc<dyn AssetUploader>,
    ledger: Arc<dyn RecordLedger>,
    state: Mutex<UiState>,
}

impl SubmissionController {
    pub fn new(
        validator: SubmissionValidator,
        uploader: Arc<dyn AssetUploader>,
        ledger: Arc<dyn RecordLedger>,
    ) -> Self {
        Self {
            validator,
            uploader,
            ledger,
            state: Mutex::new(UiState::Idle),
        }
    }

    /// Current phase of the controller.
    pub async fn ui_state(&self) -> UiState {
        *self.state.lock().await
    }

    async fn set_state(&self, state: UiState) {
        *self.state.lock().await = state;
    }

    /// Handle one submit event.
    ///
    /// The host must suppress its environment's default submit behavior
    /// before calling this. Exactly one outcome is returned per call; every
    /// error is converted here and none propagate further.
    pub async fn handle_submit(
        &self,
        raw: RawSubmission,
        surface: &mut dyn FormSurface,
    ) -> SubmissionOutcome {
        tracing::info!(photos = raw.photos.len(), "Submission received");

        // A validation rejection terminates the attempt before the busy
        // indicator is ever engaged.
        let request = match self.validator.validate(raw) {
            Ok(request) => request,
            Err(err) => {
                let outcome = SubmissionOutcome::from(SubmissionError::from(err));
                surface.show_banner(outcome.display_message(), outcome.banner_tone());
                return outcome;
            }
        };

        self.set_state(UiState::Submitting).await;
        surface.set_busy(UPLOADING_LABEL);
        surface.hide_banner();

        let outcome = match self.run_phases(&request, surface).await {
            Ok(_ack) => SubmissionOutcome::success(),
            Err(err) => {
                tracing::error!(error = %err, "Submission failed");
                SubmissionOutcome::from(err)
            }
        };
        self.set_state(UiState::Done).await;

        // Restore runs on every terminal path, whichever phase failed.
        surface.restore();
        if outcome.clears_fields() {
            surface.clear_fields();
        }
        surface.show_banner(outcome.display_message(), outcome.banner_tone());
        self.set_state(UiState::Idle).await;

        outcome
    }

    async fn run_phases(
        &self,
        request: &SubmissionRequest,
        surface: &mut dyn FormSurface,
    ) -> Result<LedgerAck, SubmissionError> {
        let assets = self.uploader.upload_batch(&request.photos).await?;

        surface.set_busy(SAVING_LABEL);
        let record = SubmissionRecord::new(request, assets, Utc::now());
        self.ledger.append(&record).await
    }
}
