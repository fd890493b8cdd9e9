//! Submission transport for the contact form.
//!
//! The live site posts to a hosted form backend (Formspree-style): multipart
//! fields, JSON-capable response, errors reported as `{"error": "..."}`.

use async_trait::async_trait;
use reqwest::header;
use reqwest::multipart::Form;
use thiserror::Error;
use tracing::debug;

use super::field::FieldValues;

/// Shown when a rejection response carries no usable message
pub const DEFAULT_REJECTION: &str = "Failed to send message";

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status
    #[error("submission rejected: {message}")]
    Rejected { message: String },

    /// No response was obtained at all
    #[error("submission failed in transit: {reason}")]
    Transport { reason: String },
}

impl SubmitError {
    /// The part of the error fit for showing to the person at the form
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Rejected { message } => message,
            SubmitError::Transport { reason } => reason,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport {
            reason: err.to_string(),
        }
    }
}

/// Transport seam: dispatches the field values to the outside world.
///
/// Implementations must not retry on their own; every retry is a fresh
/// user-initiated submit intent.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Dispatch one submission and wait for its resolution
    async fn submit(&self, values: &FieldValues) -> Result<(), SubmitError>;
}

/// HTTP submitter posting multipart form fields to a configured endpoint
pub struct HttpSubmitter {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSubmitter {
    /// Create a submitter for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, values: &FieldValues) -> Result<(), SubmitError> {
        let mut form = Form::new();
        for (field, value) in values.entries() {
            form = form.text(field.as_str(), value.to_string());
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "form endpoint accepted the submission");
            return Ok(());
        }

        let body = response.text().await?;
        debug!(%status, body = %body, "form endpoint rejected the submission");

        Err(SubmitError::Rejected {
            message: rejection_message(&body),
        })
    }
}

/// Best-effort extraction of a display message from a rejection body:
/// JSON `{"error": "..."}` first, then the raw body, then a default.
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => DEFAULT_REJECTION.to_string(),
    }
}
