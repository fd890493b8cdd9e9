//! parlor - portfolio site core
//!
//! The Rust core of a static portfolio website: the content registries that
//! feed the project galleries, and the controller behind the contact form.
//!
//! # Architecture
//!
//! Two independent pieces:
//! - The **registry** is a static, in-memory list of content records with
//!   read-only query helpers (by id, by category, related items).
//! - The **form controller** owns the contact form lifecycle: field
//!   validation, the idle/submitting state machine, draft persistence, and
//!   status messaging. It talks to the outside world only through three
//!   seams - a UI surface, a key-value store, and a submission transport -
//!   so the whole flow is testable without a real page.
//!
//! # Modules
//!
//! - `registry`: content records and query helpers
//! - `form`: contact form controller, validation, persistence, submission
//! - `store`: key-value persistence backends
//! - `config`: configuration discovery and defaults
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse the portfolio registries
//! parlor projects --kind video
//!
//! # Send a contact message
//! parlor send --name "Jane" --email jane@example.com \
//!     --subject "Project Inquiry" --message "I would like to discuss a project."
//! ```

pub mod cli;
pub mod config;
pub mod form;
pub mod registry;
pub mod store;

// Re-export main types at crate root for convenience
pub use form::{
    Banner, BannerKind, Field, FieldValues, FormController, FormSettings, FormState, FormSurface,
    HttpSubmitter, Phase, SubmitError, Submitter,
};
pub use registry::{ContentKind, ContentRecord, Registry, VideoDetails};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
