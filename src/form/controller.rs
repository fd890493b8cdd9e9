//! Contact form controller.
//!
//! One controller instance owns one form: its state, its validation, its
//! submission state machine, and its draft persistence. The concrete UI
//! registers the controller's `on_input`/`on_blur`/`on_submit` handlers
//! against its own events and renders whatever the controller pushes back
//! through the [`FormSurface`] seam.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::field::Field;
use super::persist;
use super::state::FormState;
use super::submit::Submitter;
use super::surface::{Banner, FormSurface};
use super::validate;
use crate::store::KeyValueStore;

/// Banner shown when the full-form validation pass fails
pub const VALIDATION_BANNER: &str = "Please correct the errors above and try again.";

/// Banner shown after an accepted submission
pub const SUCCESS_BANNER: &str = "Thank you! Your message has been sent successfully.";

/// Banner shown after a rejected or failed submission
fn failure_banner(detail: &str) -> String {
    format!(
        "Sorry, there was an error sending your message: {}. Please try again or contact me directly.",
        detail
    )
}

/// Per-form settings for the post-success flow
#[derive(Debug, Clone)]
pub struct FormSettings {
    /// Relative destination reached after a successful submission
    pub confirm_target: String,

    /// How long to wait before navigating there
    pub redirect_delay: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            confirm_target: "thankyou.html".to_string(),
            redirect_delay: Duration::from_secs(2),
        }
    }
}

/// Controller owning the lifecycle of a single contact form
pub struct FormController<U, S, T>
where
    U: FormSurface,
    S: KeyValueStore,
    T: Submitter,
{
    surface: U,
    store: S,
    submitter: T,
    settings: FormSettings,
    state: FormState,
}

impl<U, S, T> FormController<U, S, T>
where
    U: FormSurface,
    S: KeyValueStore,
    T: Submitter,
{
    /// Wire a controller to its surface, store, and transport, restoring
    /// any saved draft into the live fields
    pub fn attach(surface: U, store: S, submitter: T, settings: FormSettings) -> Self {
        let mut controller = Self {
            surface,
            store,
            submitter,
            settings,
            state: FormState::default(),
        };
        controller.restore_draft();
        controller
    }

    /// Pre-fill fields from the saved draft. Fields absent from storage
    /// keep their default empty value.
    fn restore_draft(&mut self) {
        let draft = persist::load_draft(&self.store);
        let mut restored = 0;

        for (field, value) in draft.entries() {
            if value.is_empty() {
                continue;
            }
            self.state.set_value(field, value);
            self.surface.set_field(field, value);
            restored += 1;
        }

        if restored > 0 {
            debug!(fields = restored, "restored saved contact form draft");
        }
    }

    /// A field's value changed. An active error on that field clears
    /// immediately without re-validating; the rule runs again on the next
    /// blur or submit.
    pub fn on_input(&mut self, field: Field, value: &str) {
        self.state.set_value(field, value);

        if self.state.take_error(field).is_some() {
            self.surface.clear_field_error(field);
        }

        persist::save_draft(&self.store, self.state.values());
    }

    /// A field lost focus: run only that field's rule and update only that
    /// field's error slot
    pub fn on_blur(&mut self, field: Field) {
        let value = self.state.values().get(field).to_string();

        match validate::validate_field(field, &value) {
            Ok(()) => {
                if self.state.take_error(field).is_some() {
                    self.surface.clear_field_error(field);
                }
            }
            Err(message) => {
                self.state.set_error(field, message);
                self.surface.show_field_error(field, message);
            }
        }

        persist::save_draft(&self.store, self.state.values());
    }

    /// Submit intent. Runs the full validation pass, then dispatches the
    /// field values through the transport. A second intent while a
    /// submission is in flight is a no-op.
    pub async fn on_submit(&mut self) {
        if self.state.phase().is_submitting() {
            debug!("submit ignored: a submission is already in flight");
            return;
        }

        if !self.apply_full_validation() {
            debug!(
                errors = self.state.error_count(),
                "submission blocked by validation"
            );
            self.surface.show_banner(&Banner::error(VALIDATION_BANNER));
            return;
        }

        self.enter_submitting();
        info!("submitting contact form");

        let accepted = match self.submitter.submit(self.state.values()).await {
            Ok(()) => {
                info!("contact form submission accepted");
                self.surface.show_banner(&Banner::success(SUCCESS_BANNER));
                persist::clear_draft(&self.store);
                self.state.clear_values();
                self.surface.reset_fields();
                true
            }
            Err(err) => {
                // Draft and field values stay put so nothing is lost
                warn!(error = %err, "contact form submission failed");
                self.surface
                    .show_banner(&Banner::error(failure_banner(err.user_message())));
                false
            }
        };

        self.leave_submitting();

        if accepted {
            tokio::time::sleep(self.settings.redirect_delay).await;
            self.surface.navigate(&self.settings.confirm_target);
        }
    }

    /// Run every field rule, replacing all error slots and inline messages.
    /// Returns true when the form is clean.
    fn apply_full_validation(&mut self) -> bool {
        self.state.clear_errors();
        for field in Field::ALL {
            self.surface.clear_field_error(field);
        }

        let failures = validate::validate_all(self.state.values());
        for &(field, message) in &failures {
            self.state.set_error(field, message);
            self.surface.show_field_error(field, message);
        }

        failures.is_empty()
    }

    fn enter_submitting(&mut self) {
        self.state.begin_submission();
        self.surface.set_submitting(true);
    }

    fn leave_submitting(&mut self) {
        self.state.finish_submission();
        self.surface.set_submitting(false);
    }

    /// Read access to the controller state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Read access to the surface, mainly for inspection in tests
    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// Read access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }
}
