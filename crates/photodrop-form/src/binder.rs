//! One-time wiring of forms to the submission controller.
//!
//! Binding state lives in a registry owned by the binder, never on the form
//! element itself. The hosting application calls [`FormBinder::initialize`]
//! once it has determined the page is ready; the binder never polls
//! environment readiness.

use std::collections::HashSet;
use std::sync::Arc;

use photodrop_core::models::{RawSubmission, SubmissionOutcome};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::controller::SubmissionController;
use crate::surface::FormSurface;

/// Identity of one host form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an initialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStatus {
    /// The form was registered by this call.
    Bound,
    /// The form was registered earlier; this call changed nothing.
    AlreadyBound,
}

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("form is not bound")]
    NotBound,
}

/// Registry of bound forms, sharing one controller.
///
/// Safe to initialize the same form repeatedly (the hosting page may load
/// the wiring code more than once); only the first call binds.
pub struct FormBinder {
    controller: Arc<SubmissionController>,
    bound: RwLock<HashSet<FormId>>,
}

impl FormBinder {
    pub fn new(controller: Arc<SubmissionController>) -> Self {
        Self {
            controller,
            bound: RwLock::new(HashSet::new()),
        }
    }

    /// Register a form with the controller. Idempotent.
    pub async fn initialize(&self, form: FormId) -> BindStatus {
        let mut bound = self.bound.write().await;
        if bound.insert(form) {
            tracing::info!(form = %form.0, "Form bound");
            BindStatus::Bound
        } else {
            tracing::debug!(form = %form.0, "Form already bound, skipping");
            BindStatus::AlreadyBound
        }
    }

    pub async fn is_bound(&self, form: FormId) -> bool {
        self.bound.read().await.contains(&form)
    }

    /// Dispatch one submit event for a bound form to the controller.
    ///
    /// One call runs the controller exactly once. Unbound forms are
    /// rejected; nothing is queued.
    pub async fn submit(
        &self,
        form: FormId,
        raw: RawSubmission,
        surface: &mut dyn FormSurface,
    ) -> Result<SubmissionOutcome, BindError> {
        if !self.is_bound(form).await {
            return Err(BindError::NotBound);
        }
        Ok(self.controller.handle_submit(raw, surface).await)
    }
}
