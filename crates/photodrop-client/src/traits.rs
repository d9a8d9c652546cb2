//! Seams between the submission controller and the remote services.

use async_trait::async_trait;
use photodrop_core::models::{LedgerAck, PhotoFile, StoredAsset, SubmissionRecord};
use photodrop_core::SubmissionError;

/// Uploads a batch of photos to remote storage.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    /// Upload the photos strictly in input order and return one descriptor
    /// per photo, in the same order. The first failure aborts the batch;
    /// photos after it are never attempted and descriptors for photos that
    /// already succeeded are discarded.
    async fn upload_batch(
        &self,
        photos: &[PhotoFile],
    ) -> Result<Vec<StoredAsset>, SubmissionError>;
}

/// Appends a submission record to the backend ledger.
#[async_trait]
pub trait RecordLedger: Send + Sync {
    async fn append(&self, record: &SubmissionRecord) -> Result<LedgerAck, SubmissionError>;
}
