//! UI surface abstraction.
//!
//! The controller never touches a page directly; it drives whatever
//! implements [`FormSurface`]. The site wires this to the DOM, the CLI to
//! the terminal, tests to a recorder.

use std::time::Duration;

use super::field::Field;

/// How long a banner stays visible before the surface dismisses it
pub const BANNER_LIFETIME: Duration = Duration::from_secs(5);

/// Severity of a status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Transient, auto-dismissing status message shown after a validation or
/// submission outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,

    /// How long the surface should keep the banner up
    pub dismiss_after: Duration,
}

impl Banner {
    /// A success banner with the default lifetime
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            dismiss_after: BANNER_LIFETIME,
        }
    }

    /// An error banner with the default lifetime
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            dismiss_after: BANNER_LIFETIME,
        }
    }
}

/// Capability set the controller needs from a concrete UI.
///
/// All operations are infallible from the controller's point of view; a
/// surface that cannot render something simply drops it.
pub trait FormSurface: Send {
    /// Mirror a field value into the live field (draft restore, resets)
    fn set_field(&mut self, field: Field, value: &str);

    /// Show an inline error next to a field, replacing any previous one
    fn show_field_error(&mut self, field: Field, message: &str);

    /// Remove the inline error for a field, if shown
    fn clear_field_error(&mut self, field: Field);

    /// Reflect the submitting state: disable/enable the submit control,
    /// swap its label and icon, and announce progress to assistive
    /// technology
    fn set_submitting(&mut self, submitting: bool);

    /// Show a status banner
    fn show_banner(&mut self, banner: &Banner);

    /// Reset every live field to its default empty value
    fn reset_fields(&mut self);

    /// Leave the form for the given relative destination
    fn navigate(&mut self, target: &str);
}
