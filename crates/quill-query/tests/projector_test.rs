//! Projector property tests: idempotence, order-insensitivity, and
//! missing-referent tolerance.

use std::sync::Arc;

use quill_core::event::{
    CommentCreated, CommentUpdated, Event, EventEnvelope, PostCreated,
};
use quill_core::model::CommentStatus;
use quill_query::projector::Projector;
use quill_test_support::{FailingViewStore, InMemoryViewStore};
use serde_json::json;
use uuid::Uuid;

fn post_created(id: Uuid, title: &str) -> EventEnvelope {
    Event::PostCreated(PostCreated {
        id,
        title: title.to_owned(),
    })
    .to_envelope()
}

fn comment_created(id: Uuid, post_id: Uuid, content: &str) -> EventEnvelope {
    Event::CommentCreated(CommentCreated {
        id,
        content: content.to_owned(),
        post_id,
        status: CommentStatus::Pending,
    })
    .to_envelope()
}

fn comment_updated(
    id: Uuid,
    post_id: Uuid,
    content: &str,
    status: CommentStatus,
) -> EventEnvelope {
    Event::CommentUpdated(CommentUpdated {
        id,
        post_id,
        content: content.to_owned(),
        status,
    })
    .to_envelope()
}

/// Applies `events` in order to a fresh store and returns the store.
async fn project(events: &[EventEnvelope]) -> Arc<InMemoryViewStore> {
    let store = Arc::new(InMemoryViewStore::new());
    let projector = Projector::new(store.clone());
    for envelope in events {
        projector.apply(envelope).await;
    }
    store
}

#[tokio::test]
async fn test_each_event_type_is_idempotent() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let events = [
        post_created(post_id, "Hello"),
        comment_created(comment_id, post_id, "hi"),
        comment_updated(comment_id, post_id, "hi", CommentStatus::Approved),
    ];

    let once = project(&events).await;

    let twice_events: Vec<EventEnvelope> = events
        .iter()
        .flat_map(|e| [e.clone(), e.clone()])
        .collect();
    let twice = project(&twice_events).await;

    assert_eq!(once.post_rows(), twice.post_rows());
    assert_eq!(once.comment_rows(), twice.comment_rows());
}

#[tokio::test]
async fn test_comment_before_post_converges_with_post_before_comment() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let post = post_created(post_id, "Hello");
    let comment = comment_created(comment_id, post_id, "hi");

    let forward = project(&[post.clone(), comment.clone()]).await;
    let reversed = project(&[comment, post]).await;

    assert_eq!(forward.post_rows(), reversed.post_rows());
    assert_eq!(forward.comment_rows(), reversed.comment_rows());
}

#[tokio::test]
async fn test_comment_for_missing_post_is_stored_not_rejected() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();

    let store = project(&[comment_created(comment_id, post_id, "hi")]).await;

    assert_eq!(store.comment_rows().len(), 1);
    assert!(store.post_rows().is_empty());
}

#[tokio::test]
async fn test_update_before_create_leaves_store_unchanged() {
    let store = project(&[comment_updated(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "hi",
        CommentStatus::Approved,
    )])
    .await;

    assert!(store.comment_rows().is_empty());
    assert!(store.post_rows().is_empty());
}

#[tokio::test]
async fn test_update_does_not_resurrect_under_redelivered_create() {
    // Create, update, then a late duplicate of the create: the duplicate
    // must not overwrite the moderated state.
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let create = comment_created(comment_id, post_id, "hi");

    let store = project(&[
        create.clone(),
        comment_updated(comment_id, post_id, "hi", CommentStatus::Approved),
        create,
    ])
    .await;

    let rows = store.comment_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].3, CommentStatus::Approved);
}

#[tokio::test]
async fn test_unknown_and_malformed_events_are_dropped_silently() {
    let store = project(&[
        EventEnvelope {
            event_type: "PostArchived".to_owned(),
            data: json!({"id": Uuid::new_v4()}),
        },
        EventEnvelope {
            event_type: "PostCreated".to_owned(),
            data: json!({"id": "not-a-uuid", "title": 7}),
        },
        EventEnvelope {
            event_type: String::new(),
            data: json!(null),
        },
    ])
    .await;

    assert!(store.post_rows().is_empty());
    assert!(store.comment_rows().is_empty());
}

#[tokio::test]
async fn test_comment_moderated_is_not_consumed_by_this_service() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();

    let store = project(&[
        comment_created(comment_id, post_id, "hi"),
        Event::CommentModerated(quill_core::event::CommentModerated {
            id: comment_id,
            post_id,
            status: CommentStatus::Approved,
            content: "hi".to_owned(),
        })
        .to_envelope(),
    ])
    .await;

    // Only the matching CommentUpdated, not CommentModerated, mutates the view.
    assert_eq!(store.comment_rows()[0].3, CommentStatus::Pending);
}

#[tokio::test]
async fn test_store_failure_is_swallowed() {
    let projector = Projector::new(Arc::new(FailingViewStore));

    // Must not panic or propagate; the error is only logged.
    projector
        .apply(&post_created(Uuid::new_v4(), "Hello"))
        .await;
}
