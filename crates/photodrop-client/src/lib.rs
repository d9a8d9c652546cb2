//! HTTP clients for the photodrop pipeline.
//!
//! [`CloudinaryStore`] pushes photos to the storage endpoint one at a time;
//! [`LedgerClient`] appends the submission record to the spreadsheet-backed
//! ledger. The [`AssetUploader`] and [`RecordLedger`] traits are the seams
//! the submission controller depends on.

pub mod cloudinary;
pub mod ledger;
pub mod traits;

pub use cloudinary::CloudinaryStore;
pub use ledger::LedgerClient;
pub use traits::{AssetUploader, RecordLedger};
