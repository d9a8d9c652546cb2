//! Test helpers: scripted fakes for the uploader, ledger, and form surface.
//!
//! Run from workspace root: `cargo test -p photodrop-form`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use photodrop_client::{AssetUploader, RecordLedger};
use photodrop_core::models::{
    BannerTone, LedgerAck, PhotoFile, RawSubmission, StoredAsset, SubmissionRecord,
};
use photodrop_core::{SubmissionError, SubmissionValidator};
use photodrop_form::{FormSurface, SubmissionController};

pub fn photo(name: &str) -> PhotoFile {
    PhotoFile::new(name, "image/jpeg", vec![0u8; 64])
}

pub fn raw(name: &str, email: &str, photos: Vec<PhotoFile>) -> RawSubmission {
    RawSubmission {
        name: name.to_string(),
        email: email.to_string(),
        category: "ceremony".to_string(),
        message: "lovely evening".to_string(),
        photos,
    }
}

pub fn controller(
    uploader: Arc<ScriptedUploader>,
    ledger: Arc<ScriptedLedger>,
) -> SubmissionController {
    init_tracing();
    SubmissionController::new(SubmissionValidator::default(), uploader, ledger)
}

/// Install a test subscriber once so RUST_LOG controls test output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Uploader fake that walks the batch sequentially like the real client,
/// counting per-file attempts, and fails at a scripted index.
pub struct ScriptedUploader {
    fail_at: Option<usize>,
    fail_status: u16,
    attempted: AtomicUsize,
}

impl ScriptedUploader {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            fail_at: None,
            fail_status: 0,
            attempted: AtomicUsize::new(0),
        })
    }

    /// Fail the upload of the photo at `index` (0-based) with an HTTP status.
    pub fn failing_at(index: usize, status: u16) -> Arc<Self> {
        Arc::new(Self {
            fail_at: Some(index),
            fail_status: status,
            attempted: AtomicUsize::new(0),
        })
    }

    /// Number of per-file upload attempts, i.e. storage calls.
    pub fn attempts(&self) -> usize {
        self.attempted.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetUploader for ScriptedUploader {
    async fn upload_batch(
        &self,
        photos: &[PhotoFile],
    ) -> Result<Vec<StoredAsset>, SubmissionError> {
        let mut uploaded = Vec::new();
        for (index, photo) in photos.iter().enumerate() {
            self.attempted.fetch_add(1, Ordering::SeqCst);
            if self.fail_at == Some(index) {
                return Err(SubmissionError::UploadFailed {
                    filename: photo.filename.clone(),
                    status: self.fail_status,
                    detail: "Invalid image file".to_string(),
                });
            }
            uploaded.push(StoredAsset {
                url: format!("https://res.example.com/{}", photo.filename),
                public_id: format!("evt_{index}"),
                original_filename: photo.filename.clone(),
                format: "jpg".to_string(),
                bytes: photo.size() as u64,
            });
        }
        Ok(uploaded)
    }
}

/// Ledger fake returning a scripted result and capturing the last record.
pub struct ScriptedLedger {
    calls: AtomicUsize,
    failure: Mutex<Option<SubmissionError>>,
    last_record: Mutex<Option<SubmissionRecord>>,
}

impl ScriptedLedger {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failure: Mutex::new(None),
            last_record: Mutex::new(None),
        })
    }

    pub fn failing_with(err: SubmissionError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failure: Mutex::new(Some(err)),
            last_record: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_record(&self) -> Option<SubmissionRecord> {
        self.last_record.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordLedger for ScriptedLedger {
    async fn append(&self, record: &SubmissionRecord) -> Result<LedgerAck, SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_record.lock().unwrap() = Some(record.clone());
        match self.failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(LedgerAck {
                message: Some("ok".to_string()),
            }),
        }
    }
}

/// Surface fake recording every mutation in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub control_disabled: bool,
    pub busy_labels: Vec<String>,
    pub banner: Option<(String, BannerTone)>,
    pub banner_hidden: usize,
    pub cleared: usize,
    pub events: Vec<String>,
}

impl FormSurface for RecordingSurface {
    fn set_busy(&mut self, label: &str) {
        self.control_disabled = true;
        self.busy_labels.push(label.to_string());
        self.events.push(format!("busy: {label}"));
    }

    fn restore(&mut self) {
        self.control_disabled = false;
        self.events.push("restore".to_string());
    }

    fn show_banner(&mut self, message: &str, tone: BannerTone) {
        self.banner = Some((message.to_string(), tone));
        self.events.push(format!("banner: {}", tone.as_class()));
    }

    fn hide_banner(&mut self) {
        self.banner_hidden += 1;
        self.events.push("hide-banner".to_string());
    }

    fn clear_fields(&mut self) {
        self.cleared += 1;
        self.events.push("clear".to_string());
    }
}

impl RecordingSurface {
    pub fn banner_class(&self) -> Option<&str> {
        self.banner.as_ref().map(|(_, tone)| tone.as_class())
    }

    pub fn banner_message(&self) -> Option<&str> {
        self.banner.as_ref().map(|(message, _)| message.as_str())
    }
}
