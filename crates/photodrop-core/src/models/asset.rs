use serde::{Deserialize, Serialize};

/// Descriptor for one photo stored on the CDN.
///
/// Produced one-to-one and order-preserving from uploaded photos; immutable
/// once created. Serializes to the ledger wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAsset {
    /// Canonical HTTPS URL of the stored photo.
    pub url: String,
    /// Unique identifier assigned by the storage service.
    pub public_id: String,
    /// Original filename. Falls back to the local filename when the storage
    /// service omits it.
    pub original_filename: String,
    /// File format as reported by the storage service (jpg, png, ...).
    pub format: String,
    /// Stored size in bytes.
    pub bytes: u64,
}
