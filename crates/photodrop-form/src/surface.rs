//! The mutable form surface driven by the controller.

use photodrop_core::models::BannerTone;

/// Interactive pieces of the host form: the submit control and the status
/// banner. Implemented by the hosting application; written only by the
/// controller, never read concurrently.
///
/// Keeping the control disabled between [`set_busy`](Self::set_busy) and
/// [`restore`](Self::restore) is the pipeline's only mutual-exclusion
/// mechanism: there is no queue, and a user must not be able to trigger a
/// second submission while one is in flight.
pub trait FormSurface {
    /// Disable the submit control and show a busy label on it.
    fn set_busy(&mut self, label: &str);

    /// Restore the submit control to its original enabled appearance.
    fn restore(&mut self);

    /// Show the status banner with the given message and tone.
    fn show_banner(&mut self, message: &str, tone: BannerTone);

    /// Hide the status banner.
    fn hide_banner(&mut self);

    /// Clear the form's input fields.
    fn clear_fields(&mut self);
}

/// Phase of the current submission attempt, held by the controller only.
/// Returns to `Idle` on every terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Done,
}
