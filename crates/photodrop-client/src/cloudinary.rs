//! Client for the unsigned Cloudinary-style upload endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use photodrop_core::models::{PhotoFile, StoredAsset};
use photodrop_core::{Config, SubmissionError};
use serde::Deserialize;

use crate::traits::AssetUploader;

/// Upload response body. Only the fields the asset descriptor needs are
/// decoded; everything else the endpoint returns is ignored.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
    public_id: String,
    format: String,
    bytes: u64,
    original_filename: Option<String>,
}

/// Uploads photos one at a time to a fixed unsigned upload endpoint.
///
/// Files are processed strictly sequentially, in input order. Each request
/// is a multipart POST with the binary content in the `file` field and the
/// public upload token in `upload_preset`. Nothing is retried; the first
/// failure aborts the batch.
pub struct CloudinaryStore {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryStore {
    pub fn new(upload_url: impl Into<String>, upload_preset: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client for the upload endpoint")?;

        Ok(Self {
            http,
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.upload_url(), config.upload_preset.clone())
    }

    async fn upload_one(&self, photo: &PhotoFile) -> Result<StoredAsset, SubmissionError> {
        let part = reqwest::multipart::Part::bytes(photo.data.to_vec())
            .file_name(photo.filename.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                filename = %photo.filename,
                %status,
                "Storage endpoint rejected the upload"
            );
            return Err(SubmissionError::UploadFailed {
                filename: photo.filename.clone(),
                status: status.as_u16(),
                detail,
            });
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| SubmissionError::StorageResponse(e.to_string()))?;

        let url = body.secure_url.or(body.url).ok_or_else(|| {
            SubmissionError::StorageResponse("upload response carries no URL".to_string())
        })?;

        Ok(StoredAsset {
            url,
            public_id: body.public_id,
            original_filename: body
                .original_filename
                .unwrap_or_else(|| photo.filename.clone()),
            format: body.format,
            bytes: body.bytes,
        })
    }
}

#[async_trait]
impl AssetUploader for CloudinaryStore {
    async fn upload_batch(
        &self,
        photos: &[PhotoFile],
    ) -> Result<Vec<StoredAsset>, SubmissionError> {
        let mut uploaded = Vec::with_capacity(photos.len());
        for (index, photo) in photos.iter().enumerate() {
            tracing::info!(
                filename = %photo.filename,
                current = index + 1,
                total = photos.len(),
                "Uploading photo"
            );
            let asset = self.upload_one(photo).await?;
            tracing::debug!(url = %asset.url, "Photo stored");
            uploaded.push(asset);
        }
        tracing::info!(count = uploaded.len(), "All photos uploaded");
        Ok(uploaded)
    }
}
