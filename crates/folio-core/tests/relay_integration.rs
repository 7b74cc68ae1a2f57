//! Integration tests for the form-relay client.
//!
//! The relay itself is an opaque third party, so these tests stand in a
//! local mock server and check the client's half of the contract: a JSON
//! POST with exactly the draft's fields, success on any 2xx status, and
//! distinct transport/status errors for everything else.

use folio_core::relay::{ContactDraft, RelayClient};
use folio_core::FolioError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_draft() -> ContactDraft {
    ContactDraft {
        name: "Grace Hopper".into(),
        email: "grace@example.com".into(),
        subject: "Compilers".into(),
        message: "Loved the gallery - let's talk.".into(),
    }
}

#[tokio::test]
async fn submit_posts_json_and_succeeds_on_200() {
    let server = MockServer::start().await;
    let draft = sample_draft();

    Mock::given(method("POST"))
        .and(path("/relay"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "subject": "Compilers",
            "message": "Loved the gallery - let's talk.",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = RelayClient::with_endpoint(format!("{}/relay", server.uri()));
    client
        .submit(&draft)
        .await
        .expect("2xx response should be success");
}

#[tokio::test]
async fn any_success_status_counts_as_delivered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = RelayClient::with_endpoint(server.uri());
    assert!(client.submit(&sample_draft()).await.is_ok());
}

#[tokio::test]
async fn non_success_status_is_a_relay_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = RelayClient::with_endpoint(server.uri());
    let err = client
        .submit(&sample_draft())
        .await
        .expect_err("500 must fail");

    match err {
        FolioError::RelayStatus(status) => assert_eq!(status, 500),
        other => panic!("expected RelayStatus, got {other:?}"),
    }
    assert!(!err.is_transport());
}

#[tokio::test]
async fn client_error_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = RelayClient::with_endpoint(server.uri());
    assert!(matches!(
        client.submit(&sample_draft()).await,
        Err(FolioError::RelayStatus(404))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Start a server only to learn a port that is then free again.
    let server = MockServer::start().await;
    let dead_endpoint = server.uri();
    drop(server);

    let client = RelayClient::with_endpoint(dead_endpoint);
    let err = client
        .submit(&sample_draft())
        .await
        .expect_err("connection must fail");

    assert!(err.is_transport(), "got {err:?}");
}
