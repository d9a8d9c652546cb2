//! Form field validation.
//!
//! Runs entirely before any network call. Rules are evaluated in a fixed
//! order and the first failure short-circuits the rest.

use crate::models::{RawSubmission, SubmissionRequest};

/// Default maximum number of photos per submission.
pub const DEFAULT_MAX_PHOTOS: usize = 5;
/// Default maximum size of one photo, in bytes (5 MiB).
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Validation failures, worded for the status banner.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Please complete all required fields.")]
    MissingRequiredFields,

    #[error("Please select at least one photo.")]
    NoPhotosSelected,

    #[error("A maximum of {max} photos is allowed.")]
    TooManyPhotos { count: usize, max: usize },

    #[error("\"{filename}\" is too large. Photos must be {max} bytes or smaller.")]
    PhotoTooLarge {
        filename: String,
        size: usize,
        max: usize,
    },
}

/// Validates raw form fields ahead of the upload pipeline.
///
/// Rule order is fixed: required fields, at least one photo, photo count
/// ceiling, per-photo size. No file-type or content validation is performed;
/// the storage service detects formats itself.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    max_photos: usize,
    max_photo_bytes: usize,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PHOTOS, DEFAULT_MAX_PHOTO_BYTES)
    }
}

impl SubmissionValidator {
    pub fn new(max_photos: usize, max_photo_bytes: usize) -> Self {
        Self {
            max_photos,
            max_photo_bytes,
        }
    }

    pub fn validate(&self, raw: RawSubmission) -> Result<SubmissionRequest, ValidationError> {
        let name = raw.name.trim();
        let email = raw.email.trim();
        if name.is_empty() || email.is_empty() {
            tracing::debug!("Submission rejected: missing required fields");
            return Err(ValidationError::MissingRequiredFields);
        }

        if raw.photos.is_empty() {
            return Err(ValidationError::NoPhotosSelected);
        }

        if raw.photos.len() > self.max_photos {
            return Err(ValidationError::TooManyPhotos {
                count: raw.photos.len(),
                max: self.max_photos,
            });
        }

        for photo in &raw.photos {
            if photo.size() > self.max_photo_bytes {
                tracing::debug!(
                    filename = %photo.filename,
                    size = photo.size(),
                    "Submission rejected: photo too large"
                );
                return Err(ValidationError::PhotoTooLarge {
                    filename: photo.filename.clone(),
                    size: photo.size(),
                    max: self.max_photo_bytes,
                });
            }
        }

        Ok(SubmissionRequest {
            name: name.to_string(),
            email: email.to_string(),
            category: raw.category,
            message: raw.message.trim().to_string(),
            photos: raw.photos,
        })
    }
}
