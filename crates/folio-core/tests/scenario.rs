//! End-to-end session flow.
//!
//! Mirrors the canonical walkthrough: the loading view holds for its
//! fixed delay, the visitor filters the gallery down to the one backend
//! project, submits the contact form, watches the success banner, and
//! sees the form return to idle with cleared fields. Timers run for real,
//! so this test takes a little over five seconds.

use std::time::Instant;

use folio_core::content::PROJECTS;
use folio_core::gallery::filter_projects;
use folio_core::motion::LOADER_HOLD;
use folio_core::relay::{ContactDraft, RelayClient, SubmissionStatus, SUCCESS_RESET};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn full_session_flow() {
    // Loading view holds for the fixed, unconditional delay.
    let started = Instant::now();
    tokio::time::sleep(LOADER_HOLD).await;
    assert!(started.elapsed() >= LOADER_HOLD);

    // Visitor clicks the "Backend" category.
    let visible = filter_projects(PROJECTS, "Backend");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Banking API");

    // Visitor fills the form and submits.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelayClient::with_endpoint(server.uri());
    let mut draft = ContactDraft {
        name: "Visitor".into(),
        email: "visitor@example.com".into(),
        subject: "Backend work".into(),
        message: "That banking API looks solid.".into(),
    };
    assert!(draft.is_complete());

    let mut status = SubmissionStatus::default();
    assert_eq!(status, SubmissionStatus::Idle);

    status = SubmissionStatus::Loading;
    assert!(status.is_loading());

    match client.submit(&draft).await {
        Ok(()) => {
            status = SubmissionStatus::Success;
            draft.clear();
        }
        Err(_) => status = SubmissionStatus::Error,
    }

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(draft, ContactDraft::default());

    // Success banner dismisses itself after the fixed delay.
    tokio::time::sleep(SUCCESS_RESET).await;
    status = SubmissionStatus::Idle;

    assert_eq!(status, SubmissionStatus::Idle);
    assert!(!draft.is_complete());
}

#[tokio::test]
async fn failed_submission_keeps_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = RelayClient::with_endpoint(server.uri());
    let mut draft = ContactDraft {
        name: "Visitor".into(),
        email: "visitor@example.com".into(),
        subject: "Hello".into(),
        message: "Still here?".into(),
    };
    let before = draft.clone();

    let mut status = SubmissionStatus::Loading;
    match client.submit(&draft).await {
        Ok(()) => {
            status = SubmissionStatus::Success;
            draft.clear();
        }
        Err(_) => status = SubmissionStatus::Error,
    }

    // Error leaves the fields untouched for a resubmit.
    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(draft, before);
}
