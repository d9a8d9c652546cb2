//! Photodrop Core Library
//!
//! This crate provides the domain models, error types, validation, and
//! configuration shared by the photodrop client and form crates.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, LedgerMode};
pub use error::SubmissionError;
pub use validation::{SubmissionValidator, ValidationError};
