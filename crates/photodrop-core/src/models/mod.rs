pub mod asset;
pub mod outcome;
pub mod photo;
pub mod submission;

pub use asset::StoredAsset;
pub use outcome::{BannerTone, SubmissionOutcome};
pub use photo::PhotoFile;
pub use submission::{LedgerAck, RawSubmission, SubmissionRecord, SubmissionRequest};
