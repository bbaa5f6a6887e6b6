//! Integration tests for the comments service routes.

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use quill_comments::routes;
use quill_comments::state::AppState;
use quill_core::event::{CommentCreated, Event};
use quill_core::log::EventLog;
use quill_core::model::CommentStatus;
use quill_core::store::CommentStore;
use quill_event_log::EventEmitter;
use quill_test_support::{
    FailingCommentStore, FailingEventLog, InMemoryCommentStore, InMemoryEventLog, get_json,
    post_json,
};
use serde_json::json;
use uuid::Uuid;

fn build_app(store: Arc<dyn CommentStore>, log: Arc<dyn EventLog>) -> Router {
    let app_state = AppState::new(store, EventEmitter::new(log));
    Router::new()
        .merge(quill_service::health::router())
        .merge(routes::comments::router())
        .merge(routes::events::router())
        .with_state(app_state)
}

#[tokio::test]
async fn test_create_comment_is_pending_and_emits_comment_created() {
    let store = Arc::new(InMemoryCommentStore::new());
    let log = Arc::new(InMemoryEventLog::new());
    let app = build_app(store.clone(), log.clone());
    let post_id = Uuid::new_v4();

    let (status, body) = post_json(
        app,
        &format!("/posts/{post_id}/comments"),
        &json!({"content": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["content"], "hi");
    assert_eq!(body["status"], "pending");
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    let comments = store.comments();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].post_id, post_id);
    assert_eq!(comments[0].status, CommentStatus::Pending);

    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        Event::CommentCreated(CommentCreated {
            id,
            content: "hi".to_owned(),
            post_id,
            status: CommentStatus::Pending,
        })
        .to_envelope()
    );
}

#[tokio::test]
async fn test_list_comments_returns_comments_for_post_only() {
    let store = Arc::new(InMemoryCommentStore::new());
    let log = Arc::new(InMemoryEventLog::new());
    let post_id = Uuid::new_v4();
    let other_post = Uuid::new_v4();

    store
        .insert_comment(Uuid::new_v4(), post_id, "first", CommentStatus::Pending)
        .await
        .unwrap();
    store
        .insert_comment(Uuid::new_v4(), post_id, "second", CommentStatus::Approved)
        .await
        .unwrap();
    store
        .insert_comment(Uuid::new_v4(), other_post, "elsewhere", CommentStatus::Pending)
        .await
        .unwrap();

    let app = build_app(store, log);
    let (status, body) = get_json(app, &format!("/posts/{post_id}/comments")).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["content"], "first");
    assert_eq!(rows[1]["content"], "second");
    assert_eq!(rows[1]["status"], "approved");
}

#[tokio::test]
async fn test_list_comments_for_unknown_post_is_empty() {
    let app = build_app(
        Arc::new(InMemoryCommentStore::new()),
        Arc::new(InMemoryEventLog::new()),
    );

    let (status, body) = get_json(app, &format!("/posts/{}/comments", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_store_failure_returns_500_and_emits_nothing() {
    let log = Arc::new(InMemoryEventLog::new());
    let app = build_app(Arc::new(FailingCommentStore), log.clone());

    let (status, body) = post_json(
        app,
        &format!("/posts/{}/comments", Uuid::new_v4()),
        &json!({"content": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "store_error");
    assert!(log.events().is_empty());
}

#[tokio::test]
async fn test_log_failure_does_not_affect_the_caller() {
    let store = Arc::new(InMemoryCommentStore::new());
    let app = build_app(store.clone(), Arc::new(FailingEventLog));

    let (status, _) = post_json(
        app,
        &format!("/posts/{}/comments", Uuid::new_v4()),
        &json!({"content": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.comments().len(), 1);
}

#[tokio::test]
async fn test_empty_content_is_rejected() {
    let store = Arc::new(InMemoryCommentStore::new());
    let log = Arc::new(InMemoryEventLog::new());
    let app = build_app(store.clone(), log.clone());

    let (status, body) = post_json(
        app,
        &format!("/posts/{}/comments", Uuid::new_v4()),
        &json!({"content": ""}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(store.comments().is_empty());
    assert!(log.events().is_empty());
}
