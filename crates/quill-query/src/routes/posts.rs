//! The materialized posts-with-comments view.

use std::collections::HashMap;

use axum::extract::State;
use axum::{Json, Router, routing::get};
use quill_core::model::CommentStatus;
use quill_service::error::ApiError;
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

/// One comment inside the view.
#[derive(Debug, Serialize)]
pub struct CommentView {
    /// Comment identifier.
    pub id: Uuid,
    /// Comment body.
    pub content: String,
    /// Moderation status.
    pub status: CommentStatus,
}

/// One post with its comments, oldest comment first.
#[derive(Debug, Serialize)]
pub struct PostView {
    /// Post identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// The post's comments.
    pub comments: Vec<CommentView>,
}

/// GET /posts
///
/// Assembles the `post id -> post + comments` map from the view store.
/// Comments whose post is not (yet) in the view are omitted, not an error.
async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<HashMap<Uuid, PostView>>, ApiError> {
    let mut view: HashMap<Uuid, PostView> = state
        .store
        .posts()
        .await?
        .into_iter()
        .map(|p| {
            (
                p.id,
                PostView {
                    id: p.id,
                    title: p.title,
                    comments: Vec::new(),
                },
            )
        })
        .collect();

    for comment in state.store.comments().await? {
        if let Some(post) = view.get_mut(&comment.post_id) {
            post.comments.push(CommentView {
                id: comment.id,
                content: comment.content,
                status: comment.status,
            });
        }
    }

    Ok(Json(view))
}

/// Returns the posts view router.
pub fn router() -> Router<AppState> {
    Router::new().route("/posts", get(list_posts))
}
