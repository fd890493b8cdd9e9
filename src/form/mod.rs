//! Contact form: validation, submission state machine, draft persistence.
//!
//! The controller is the entry point; everything else is a seam it drives.

pub mod controller;
pub mod field;
pub mod persist;
pub mod state;
pub mod submit;
pub mod surface;
pub mod validate;

pub use controller::{FormController, FormSettings, SUCCESS_BANNER, VALIDATION_BANNER};
pub use field::{Field, FieldValues};
pub use persist::DRAFT_KEY;
pub use state::{FormState, Phase};
pub use submit::{HttpSubmitter, SubmitError, Submitter};
pub use surface::{Banner, BannerKind, FormSurface, BANNER_LIFETIME};
