//! Post creation route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use quill_core::error::DomainError;
use quill_core::event::{Event, PostCreated};
use quill_service::error::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;

/// Request body for post creation.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Post title.
    pub title: String,
}

/// Response body for a created post.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post identifier, generated server-side.
    pub id: Uuid,
    /// Post title.
    pub title: String,
}

/// POST /posts/create
///
/// Inserts the post locally, then makes one best-effort attempt to emit
/// `PostCreated`. The response reflects only the local write.
async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".into()).into());
    }

    let id = Uuid::new_v4();
    state.store.insert_post(id, &request.title).await?;

    state
        .emitter
        .emit(&Event::PostCreated(PostCreated {
            id,
            title: request.title.clone(),
        }))
        .await;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            id,
            title: request.title,
        }),
    ))
}

/// Returns the posts router.
pub fn router() -> Router<AppState> {
    Router::new().route("/posts/create", post(create_post))
}
