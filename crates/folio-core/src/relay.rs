//! Contact form draft, submission status, and the form-relay client.
//!
//! The relay is an opaque external collaborator: one fixed HTTPS
//! endpoint, one POST with a JSON body, and only the response status is
//! consulted. Any HTTP success status counts as delivered; everything
//! else - including transport failures - surfaces as a single error
//! state. No retries, no queueing, no response-body parsing.

use std::time::Duration;

use serde::Serialize;

use crate::error::{FolioError, FolioResult};

/// Default form-relay endpoint.
pub const FORM_RELAY_URL: &str = "https://script.google.com/macros/s/AKfycbwO80sbn-WO5GozoZ4UW81s0bMNgA2tNzrQTYbsj1y6n7Z9KAXzPhMHvigHt6drKSYS/exec";

/// How long the success banner stays up before reverting to idle.
pub const SUCCESS_RESET: Duration = Duration::from_secs(3);

/// Mutable state of the contact form's four fields.
///
/// Cleared after a successful submission, left untouched after a failed
/// one so the user can resubmit. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// All four fields carry non-blank text.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where the contact section is within a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    /// A request is in flight; the submit control should be disabled.
    pub fn is_loading(self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }
}

/// HTTP client for the form-relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    /// Client against the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(FORM_RELAY_URL)
    }

    /// Client against a custom endpoint (tests, `--relay-url`).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the draft as JSON and collapse the outcome to delivered/not.
    pub async fn submit(&self, draft: &ContactDraft) -> FolioResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact form delivered");
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "form relay rejected submission");
            Err(FolioError::RelayStatus(status.as_u16()))
        }
    }
}

impl Default for RelayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ContactDraft {
        ContactDraft {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Analytical engines".into(),
            message: "Shall we collaborate?".into(),
        }
    }

    #[test]
    fn test_draft_completeness_requires_all_fields() {
        assert!(filled_draft().is_complete());

        let mut draft = filled_draft();
        draft.subject = "   ".into();
        assert!(!draft.is_complete());

        assert!(!ContactDraft::default().is_complete());
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut draft = filled_draft();
        draft.clear();
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_payload_has_exactly_the_four_fields() {
        let value = serde_json::to_value(filled_draft()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["name", "email", "subject", "message"] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_status_defaults_to_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(SubmissionStatus::Loading.is_loading());
        assert!(!SubmissionStatus::Success.is_loading());
    }

    #[test]
    fn test_client_keeps_custom_endpoint() {
        let client = RelayClient::with_endpoint("http://localhost:9999/relay");
        assert_eq!(client.endpoint(), "http://localhost:9999/relay");
        assert_eq!(RelayClient::new().endpoint(), FORM_RELAY_URL);
    }
}
