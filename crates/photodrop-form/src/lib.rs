//! Form-side orchestration for photodrop.
//!
//! [`SubmissionController`] drives one submission attempt through its
//! phases; [`FormBinder`] wires forms to the controller exactly once; the
//! [`FormSurface`] trait is the host-implemented seam for the submit control
//! and status banner.

pub mod binder;
pub mod controller;
pub mod surface;

pub use binder::{BindError, BindStatus, FormBinder, FormId};
pub use controller::SubmissionController;
pub use surface::{FormSurface, UiState};
