//! Form Controller Integration Tests
//!
//! Drives the full controller flow against recording test doubles: the
//! submission state machine, validation gating, draft persistence, and
//! the field-event handlers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use parlor::form::{
    Banner, BannerKind, Field, FieldValues, FormController, FormSettings, FormSurface, Phase,
    SubmitError, Submitter, DRAFT_KEY, SUCCESS_BANNER, VALIDATION_BANNER,
};
use parlor::store::{KeyValueStore, MemoryStore};

/// Everything the controller pushed to the UI, in order
#[derive(Debug, Clone, PartialEq)]
enum SurfaceEvent {
    FieldSet(Field, String),
    ErrorShown(Field, String),
    ErrorCleared(Field),
    Submitting(bool),
    BannerShown(BannerKind, String),
    FieldsReset,
    Navigated(String),
}

#[derive(Debug, Default)]
struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl FormSurface for RecordingSurface {
    fn set_field(&mut self, field: Field, value: &str) {
        self.events
            .push(SurfaceEvent::FieldSet(field, value.to_string()));
    }

    fn show_field_error(&mut self, field: Field, message: &str) {
        self.events
            .push(SurfaceEvent::ErrorShown(field, message.to_string()));
    }

    fn clear_field_error(&mut self, field: Field) {
        self.events.push(SurfaceEvent::ErrorCleared(field));
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.events.push(SurfaceEvent::Submitting(submitting));
    }

    fn show_banner(&mut self, banner: &Banner) {
        self.events
            .push(SurfaceEvent::BannerShown(banner.kind, banner.message.clone()));
    }

    fn reset_fields(&mut self) {
        self.events.push(SurfaceEvent::FieldsReset);
    }

    fn navigate(&mut self, target: &str) {
        self.events.push(SurfaceEvent::Navigated(target.to_string()));
    }
}

/// Scripted transport outcome
#[derive(Debug, Clone)]
enum Outcome {
    Accept,
    Reject(&'static str),
    Fail(&'static str),
}

struct ScriptedSubmitter {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSubmitter {
    fn new(outcome: Outcome) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                outcome,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    async fn submit(&self, _values: &FieldValues) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject(message) => Err(SubmitError::Rejected {
                message: message.to_string(),
            }),
            Outcome::Fail(reason) => Err(SubmitError::Transport {
                reason: reason.to_string(),
            }),
        }
    }
}

fn settings() -> FormSettings {
    FormSettings {
        confirm_target: "thankyou.html".to_string(),
        redirect_delay: Duration::ZERO,
    }
}

fn controller_with(
    store: MemoryStore,
    outcome: Outcome,
) -> (
    FormController<RecordingSurface, MemoryStore, ScriptedSubmitter>,
    Arc<AtomicUsize>,
) {
    let (submitter, calls) = ScriptedSubmitter::new(outcome);
    let controller = FormController::attach(RecordingSurface::default(), store, submitter, settings());
    (controller, calls)
}

fn fill_valid(controller: &mut FormController<RecordingSurface, MemoryStore, ScriptedSubmitter>) {
    controller.on_input(Field::Name, "Jane");
    controller.on_input(Field::Email, "jane@example.com");
    controller.on_input(Field::Subject, "Project Inquiry");
    controller.on_input(Field::Message, "I would like to discuss a project.");
}

fn position(events: &[SurfaceEvent], wanted: &SurfaceEvent) -> usize {
    events
        .iter()
        .position(|event| event == wanted)
        .unwrap_or_else(|| panic!("event {:?} not found in {:?}", wanted, events))
}

#[tokio::test]
async fn test_successful_submission_clears_draft_and_resets_fields() {
    let (mut controller, calls) = controller_with(MemoryStore::new(), Outcome::Accept);
    fill_valid(&mut controller);

    // The draft was written while typing
    assert!(controller.store().get(DRAFT_KEY).unwrap().is_some());

    controller.on_submit().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.store().get(DRAFT_KEY).unwrap(), None);
    assert_eq!(controller.state().values(), &FieldValues::default());
    assert_eq!(controller.state().phase(), Phase::Idle);

    let events = &controller.surface().events;
    let started = position(events, &SurfaceEvent::Submitting(true));
    let banner = position(
        events,
        &SurfaceEvent::BannerShown(BannerKind::Success, SUCCESS_BANNER.to_string()),
    );
    let reset = position(events, &SurfaceEvent::FieldsReset);
    let finished = position(events, &SurfaceEvent::Submitting(false));
    let navigated = position(events, &SurfaceEvent::Navigated("thankyou.html".to_string()));

    assert!(started < banner);
    assert!(banner < reset);
    assert!(reset < finished);
    assert!(finished < navigated);
}

#[tokio::test]
async fn test_validation_failure_never_contacts_endpoint() {
    let (mut controller, calls) = controller_with(MemoryStore::new(), Outcome::Accept);
    controller.on_input(Field::Name, "A");
    controller.on_input(Field::Email, "bad");
    controller.on_input(Field::Subject, "ok!!");
    controller.on_input(Field::Message, "short");

    controller.on_submit().await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.state().error_count(), 4);
    assert_eq!(controller.state().phase(), Phase::Idle);

    let events = &controller.surface().events;
    for (field, message) in [
        (Field::Name, "Name must be at least 2 characters long"),
        (Field::Email, "Please enter a valid email address"),
        (Field::Subject, "Subject must be at least 5 characters long"),
        (Field::Message, "Message must be at least 10 characters long"),
    ] {
        position(events, &SurfaceEvent::ErrorShown(field, message.to_string()));
    }
    position(
        events,
        &SurfaceEvent::BannerShown(BannerKind::Error, VALIDATION_BANNER.to_string()),
    );

    // The submitting state was never entered
    assert!(!events.contains(&SurfaceEvent::Submitting(true)));
}

#[tokio::test]
async fn test_rejected_submission_keeps_draft_and_values() {
    let (mut controller, calls) = controller_with(MemoryStore::new(), Outcome::Reject("Form not found"));
    fill_valid(&mut controller);

    controller.on_submit().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(controller.store().get(DRAFT_KEY).unwrap().is_some());
    assert_eq!(controller.state().values().get(Field::Name), "Jane");
    assert_eq!(controller.state().phase(), Phase::Idle);

    let events = &controller.surface().events;
    position(
        events,
        &SurfaceEvent::BannerShown(
            BannerKind::Error,
            "Sorry, there was an error sending your message: Form not found. \
             Please try again or contact me directly."
                .to_string(),
        ),
    );
    assert!(!events.contains(&SurfaceEvent::FieldsReset));
    assert!(!events
        .iter()
        .any(|event| matches!(event, SurfaceEvent::Navigated(_))));

    // A fresh submit intent goes through again; no automatic retry happened
    controller.on_submit().await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_transport_failure_keeps_draft_and_values() {
    let (mut controller, calls) =
        controller_with(MemoryStore::new(), Outcome::Fail("connection refused"));
    fill_valid(&mut controller);

    controller.on_submit().await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(controller.store().get(DRAFT_KEY).unwrap().is_some());
    assert_eq!(
        controller.state().values().get(Field::Message),
        "I would like to discuss a project."
    );
    assert_eq!(controller.state().phase(), Phase::Idle);

    let events = &controller.surface().events;
    assert!(events.iter().any(|event| matches!(
        event,
        SurfaceEvent::BannerShown(BannerKind::Error, message) if message.contains("connection refused")
    )));
}

#[tokio::test]
async fn test_typing_clears_field_error_without_revalidation() {
    let (mut controller, _calls) = controller_with(MemoryStore::new(), Outcome::Accept);

    controller.on_input(Field::Name, "A");
    controller.on_blur(Field::Name);
    assert!(controller.state().error(Field::Name).is_some());

    // Still too short, but the error clears optimistically
    controller.on_input(Field::Name, "B");
    assert!(controller.state().error(Field::Name).is_none());

    let events = &controller.surface().events;
    let shown = position(
        events,
        &SurfaceEvent::ErrorShown(Field::Name, "Name must be at least 2 characters long".to_string()),
    );
    let cleared = position(events, &SurfaceEvent::ErrorCleared(Field::Name));
    assert!(shown < cleared);

    // No re-validation ran, so the error was not shown a second time
    let shown_count = events
        .iter()
        .filter(|event| matches!(event, SurfaceEvent::ErrorShown(Field::Name, _)))
        .count();
    assert_eq!(shown_count, 1);
}

#[tokio::test]
async fn test_blur_validates_only_that_field() {
    let (mut controller, _calls) = controller_with(MemoryStore::new(), Outcome::Accept);

    controller.on_input(Field::Email, "not-an-email");
    controller.on_blur(Field::Email);

    assert!(controller.state().error(Field::Email).is_some());
    assert!(controller.state().error(Field::Name).is_none());
    assert!(controller.state().error(Field::Subject).is_none());
    assert!(controller.state().error(Field::Message).is_none());

    // Blur on a valid field clears its slot and touches nothing else
    controller.on_input(Field::Name, "Jane");
    controller.on_blur(Field::Name);
    assert!(controller.state().error(Field::Name).is_none());
    assert!(controller.state().error(Field::Email).is_some());
}

#[tokio::test]
async fn test_attach_restores_saved_draft() {
    let store = MemoryStore::with_entry(
        DRAFT_KEY,
        "{\"name\": \"Jane\", \"subject\": \"Project Inquiry\"}",
    );

    let (controller, _calls) = controller_with(store, Outcome::Accept);

    assert_eq!(controller.state().values().get(Field::Name), "Jane");
    assert_eq!(
        controller.state().values().get(Field::Subject),
        "Project Inquiry"
    );
    assert_eq!(controller.state().values().get(Field::Email), "");

    let events = &controller.surface().events;
    position(
        events,
        &SurfaceEvent::FieldSet(Field::Name, "Jane".to_string()),
    );
    position(
        events,
        &SurfaceEvent::FieldSet(Field::Subject, "Project Inquiry".to_string()),
    );
    assert_eq!(events.len(), 2);
}

#[tokio::test]
async fn test_attach_tolerates_corrupt_draft() {
    let store = MemoryStore::with_entry(DRAFT_KEY, "{definitely not json");

    let (controller, _calls) = controller_with(store, Outcome::Accept);

    assert_eq!(controller.state().values(), &FieldValues::default());
    assert!(controller.surface().events.is_empty());
}

#[tokio::test]
async fn test_input_persists_draft_before_returning() {
    let (mut controller, _calls) = controller_with(MemoryStore::new(), Outcome::Accept);

    controller.on_input(Field::Name, "Jane");

    let raw = controller
        .store()
        .get(DRAFT_KEY)
        .unwrap()
        .expect("draft written on input");
    assert!(raw.contains("\"name\""));
    assert!(raw.contains("Jane"));
}
