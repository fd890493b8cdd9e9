//! Form state and the submission phase machine.

use std::collections::HashMap;

use super::field::{Field, FieldValues};

/// Submission phase of a form.
///
/// `Submitting` covers the window between submit intent and resolution of
/// the response or failure. There is no terminal success/failure phase;
/// outcomes are transient banners and the form always returns to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

impl Phase {
    /// Whether a submission is currently in flight
    pub fn is_submitting(self) -> bool {
        matches!(self, Phase::Submitting)
    }
}

/// State owned by one form controller instance
#[derive(Debug, Default)]
pub struct FormState {
    values: FieldValues,
    errors: HashMap<Field, &'static str>,
    phase: Phase,
}

impl FormState {
    /// Current field values
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Replace one field's value
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Reset every field to empty
    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    /// The active error for a field, if any
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Record an error for a field, replacing any previous one
    pub fn set_error(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    /// Remove and return the active error for a field
    pub fn take_error(&mut self, field: Field) -> Option<&'static str> {
        self.errors.remove(&field)
    }

    /// Drop all active errors
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Number of fields with an active error
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Current submission phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter `Submitting`. Returns false (and changes nothing) when a
    /// submission is already in flight; this is the re-entrancy guard.
    pub fn begin_submission(&mut self) -> bool {
        if self.phase.is_submitting() {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// Return to `Idle` after the in-flight submission resolves
    pub fn finish_submission(&mut self) {
        self.phase = Phase::Idle;
    }
}
