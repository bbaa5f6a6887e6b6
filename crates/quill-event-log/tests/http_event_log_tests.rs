//! Integration tests for `HttpEventLog` against a mock log server.

use quill_core::error::EventLogError;
use quill_core::event::{Event, EventEnvelope, PostCreated};
use quill_core::log::EventLog;
use quill_event_log::HttpEventLog;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_created_envelope() -> EventEnvelope {
    Event::PostCreated(PostCreated {
        id: Uuid::new_v4(),
        title: "Hello".to_owned(),
    })
    .to_envelope()
}

#[tokio::test]
async fn test_append_posts_envelope_to_events() {
    let server = MockServer::start().await;
    let envelope = post_created_envelope();

    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_json(&envelope))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let log = HttpEventLog::new(server.uri()).unwrap();

    log.append(&envelope).await.unwrap();
}

#[tokio::test]
async fn test_append_maps_non_success_status_to_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let log = HttpEventLog::new(server.uri()).unwrap();

    let err = log.append(&post_created_envelope()).await.unwrap_err();
    assert!(matches!(err, EventLogError::Status(500)));
}

#[tokio::test]
async fn test_read_all_returns_full_history_in_order() {
    let server = MockServer::start().await;
    let first = post_created_envelope();
    let second = post_created_envelope();

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(vec![first.clone(), second.clone()]),
        )
        .mount(&server)
        .await;

    let log = HttpEventLog::new(server.uri()).unwrap();

    let history = log.read_all().await.unwrap();
    assert_eq!(history, vec![first, second]);
}

#[tokio::test]
async fn test_read_all_maps_malformed_body_to_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let log = HttpEventLog::new(server.uri()).unwrap();

    let err = log.read_all().await.unwrap_err();
    assert!(matches!(err, EventLogError::Malformed(_)));
}

#[tokio::test]
async fn test_unreachable_log_is_a_transport_error() {
    // Nothing listens on this port.
    let log = HttpEventLog::new("http://127.0.0.1:1").unwrap();

    let err = log.read_all().await.unwrap_err();
    assert!(matches!(err, EventLogError::Transport(_)));
}
