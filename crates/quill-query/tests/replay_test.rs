//! Replay controller tests: convergence, re-entrancy, and degraded startup.

use std::sync::Arc;

use quill_core::event::{CommentCreated, CommentUpdated, Event, EventEnvelope, PostCreated};
use quill_core::model::CommentStatus;
use quill_query::projector::Projector;
use quill_query::replay;
use quill_test_support::{FailingEventLog, InMemoryEventLog, InMemoryViewStore};
use uuid::Uuid;

fn sample_history(post_id: Uuid, comment_id: Uuid) -> Vec<EventEnvelope> {
    vec![
        Event::PostCreated(PostCreated {
            id: post_id,
            title: "Hello".to_owned(),
        })
        .to_envelope(),
        Event::CommentCreated(CommentCreated {
            id: comment_id,
            content: "hi".to_owned(),
            post_id,
            status: CommentStatus::Pending,
        })
        .to_envelope(),
        Event::CommentUpdated(CommentUpdated {
            id: comment_id,
            post_id,
            content: "hi".to_owned(),
            status: CommentStatus::Approved,
        })
        .to_envelope(),
    ]
}

#[tokio::test]
async fn test_replay_rebuilds_the_view_from_history() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let log = InMemoryEventLog::with_history(sample_history(post_id, comment_id));
    let store = Arc::new(InMemoryViewStore::new());
    let projector = Projector::new(store.clone());

    replay::run(&log, &projector).await;

    assert_eq!(store.post_rows(), vec![(post_id, "Hello".to_owned())]);
    assert_eq!(
        store.comment_rows(),
        vec![(comment_id, post_id, "hi".to_owned(), CommentStatus::Approved)]
    );
}

#[tokio::test]
async fn test_replay_with_duplicates_matches_distinct_history() {
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let history = sample_history(post_id, comment_id);

    let clean_store = Arc::new(InMemoryViewStore::new());
    replay::run(
        &InMemoryEventLog::with_history(history.clone()),
        &Projector::new(clean_store.clone()),
    )
    .await;

    // Same history with every event delivered twice in place.
    let duplicated: Vec<EventEnvelope> = history
        .iter()
        .flat_map(|e| [e.clone(), e.clone()])
        .collect();
    let dup_store = Arc::new(InMemoryViewStore::new());
    replay::run(
        &InMemoryEventLog::with_history(duplicated),
        &Projector::new(dup_store.clone()),
    )
    .await;

    assert_eq!(clean_store.post_rows(), dup_store.post_rows());
    assert_eq!(clean_store.comment_rows(), dup_store.comment_rows());
}

#[tokio::test]
async fn test_replay_twice_does_not_corrupt_state() {
    // A crash between replays means the whole history is applied again.
    let post_id = Uuid::new_v4();
    let comment_id = Uuid::new_v4();
    let log = InMemoryEventLog::with_history(sample_history(post_id, comment_id));
    let store = Arc::new(InMemoryViewStore::new());
    let projector = Projector::new(store.clone());

    replay::run(&log, &projector).await;
    let after_first = (store.post_rows(), store.comment_rows());
    replay::run(&log, &projector).await;

    assert_eq!((store.post_rows(), store.comment_rows()), after_first);
}

#[tokio::test]
async fn test_fetch_failure_leaves_state_untouched_and_does_not_panic() {
    let store = Arc::new(InMemoryViewStore::new());
    let projector = Projector::new(store.clone());

    replay::run(&FailingEventLog, &projector).await;

    assert!(store.post_rows().is_empty());
    assert!(store.comment_rows().is_empty());
}
