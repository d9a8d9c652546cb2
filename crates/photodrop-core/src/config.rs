//! Configuration module
//!
//! Endpoint coordinates, the upload authorization token, the ledger
//! transport mode, and submission limits. Values come from the environment;
//! nothing else in the workspace reads environment variables.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use anyhow::Context;

use crate::validation::{DEFAULT_MAX_PHOTOS, DEFAULT_MAX_PHOTO_BYTES};

const DEFAULT_UPLOAD_BASE_URL: &str = "https://api.cloudinary.com";

/// Transport mode for ledger submissions.
///
/// The two modes are mutually exclusive policies for the same endpoint,
/// chosen per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerMode {
    /// POST JSON and interpret the response body.
    Verified,
    /// POST with `Content-Type: text/plain` and never read the response; any
    /// request dispatched without a transport error counts as accepted.
    /// Used against deployments where the response cannot be read
    /// cross-origin.
    FireAndForget,
}

impl FromStr for LedgerMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verified" => Ok(LedgerMode::Verified),
            "fire-and-forget" | "fire_and_forget" => Ok(LedgerMode::FireAndForget),
            _ => Err(anyhow::anyhow!("Invalid ledger mode: {}", s)),
        }
    }
}

impl Display for LedgerMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LedgerMode::Verified => write!(f, "verified"),
            LedgerMode::FireAndForget => write!(f, "fire-and-forget"),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Account segment of the storage upload URL.
    pub cloud_name: String,
    /// Public unsigned-upload token sent with every file.
    pub upload_preset: String,
    /// Scheme and host of the storage API.
    pub upload_base_url: String,
    /// Ledger endpoint URL.
    pub ledger_url: String,
    pub ledger_mode: LedgerMode,
    pub max_photos: usize,
    pub max_photo_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            cloud_name: env::var("PHOTODROP_CLOUD_NAME")
                .context("PHOTODROP_CLOUD_NAME must be set")?,
            upload_preset: env::var("PHOTODROP_UPLOAD_PRESET")
                .context("PHOTODROP_UPLOAD_PRESET must be set")?,
            upload_base_url: env::var("PHOTODROP_UPLOAD_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_BASE_URL.to_string()),
            ledger_url: env::var("PHOTODROP_LEDGER_URL")
                .context("PHOTODROP_LEDGER_URL must be set")?,
            ledger_mode: env::var("PHOTODROP_LEDGER_MODE")
                .unwrap_or_else(|_| LedgerMode::Verified.to_string())
                .parse()?,
            max_photos: env::var("PHOTODROP_MAX_PHOTOS")
                .unwrap_or_else(|_| DEFAULT_MAX_PHOTOS.to_string())
                .parse()
                .context("PHOTODROP_MAX_PHOTOS must be a number")?,
            max_photo_bytes: env::var("PHOTODROP_MAX_PHOTO_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_PHOTO_BYTES.to_string())
                .parse()
                .context("PHOTODROP_MAX_PHOTO_BYTES must be a number")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.cloud_name.trim().is_empty() {
            anyhow::bail!("cloud_name must not be empty");
        }
        if self.upload_preset.trim().is_empty() {
            anyhow::bail!("upload_preset must not be empty");
        }
        if !self.upload_base_url.starts_with("http") {
            anyhow::bail!("upload_base_url must be an http(s) URL");
        }
        if !self.ledger_url.starts_with("http") {
            anyhow::bail!("ledger_url must be an http(s) URL");
        }
        if self.max_photos == 0 {
            anyhow::bail!("max_photos must be at least 1");
        }
        if self.max_photo_bytes == 0 {
            anyhow::bail!("max_photo_bytes must be at least 1");
        }
        Ok(())
    }

    /// Full upload endpoint URL.
    pub fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/upload",
            self.upload_base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }
}
