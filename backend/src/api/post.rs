use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    middleware, routing, Router,
};
use tracing::{debug, info};

use crate::auth::require_auth;
use crate::models::{AppError, AppState, Comment, CustomResponse, NewComment, NewPost, Post};

/// `POST /posts` sits behind the access guard; reading posts and
/// commenting are public.
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let create = routing::post(create_post)
        .route_layer(middleware::from_fn_with_state(state, require_auth));
    Router::new()
        .route("/posts", create.merge(routing::get(read_posts)))
        .route("/posts/{id}/comments", routing::post(create_comment))
}

pub async fn create_post(
    State(app_state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<CustomResponse<Post>, AppError> {
    let new_post: NewPost =
        serde_json::from_slice(&body).map_err(|e| AppError::bad_request(&e.to_string()))?;
    let post = app_state.store.create_post(new_post).await?;
    info!("Created post {}", post.id);
    Ok(CustomResponse::json(StatusCode::OK, post))
}

pub async fn read_posts(
    State(app_state): State<Arc<AppState>>,
) -> Result<CustomResponse<Vec<Post>>, AppError> {
    let posts = app_state.store.list_posts().await?;
    debug!("Read {} posts", posts.len());
    Ok(CustomResponse::json(StatusCode::OK, posts))
}

pub async fn create_comment(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<CustomResponse<Comment>, AppError> {
    let post_id = id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request("Invalid post ID"))?;
    let new_comment: NewComment = serde_json::from_slice(&body)
        .map_err(|_| AppError::bad_request("Invalid request payload"))?;

    let comment = app_state
        .store
        .add_comment(post_id, new_comment)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found"))?;
    Ok(CustomResponse::json(StatusCode::OK, comment))
}
