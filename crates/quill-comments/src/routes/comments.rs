//! Comment creation and listing routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use quill_core::error::DomainError;
use quill_core::event::{CommentCreated, Event};
use quill_core::model::CommentStatus;
use quill_service::error::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

/// Request body for comment creation.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Comment body.
    pub content: String,
}

/// Response body for a single comment.
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    /// Comment identifier.
    pub id: Uuid,
    /// Comment body.
    pub content: String,
    /// Moderation status.
    pub status: CommentStatus,
}

/// GET /posts/{id}/comments
async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let comments = state.store.comments_for_post(post_id).await?;

    Ok(Json(
        comments
            .into_iter()
            .map(|c| CommentResponse {
                id: c.id,
                content: c.content,
                status: c.status,
            })
            .collect(),
    ))
}

/// POST /posts/{id}/comments
///
/// Inserts the comment locally in `pending` status, then makes one
/// best-effort attempt to emit `CommentCreated`.
async fn create_comment(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    if request.content.trim().is_empty() {
        return Err(DomainError::Validation("content must not be empty".into()).into());
    }

    let id = Uuid::new_v4();
    let status = CommentStatus::Pending;
    state
        .store
        .insert_comment(id, post_id, &request.content, status)
        .await?;

    state
        .emitter
        .emit(&Event::CommentCreated(CommentCreated {
            id,
            content: request.content.clone(),
            post_id,
            status,
        }))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            id,
            content: request.content,
            status,
        }),
    ))
}

/// Returns the comments router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/posts/{id}/comments",
        get(list_comments).post(create_comment),
    )
}
