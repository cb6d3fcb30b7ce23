//! JSON API handlers
//!
//! - GET    /api/posts               - List published posts
//! - POST   /api/posts               - Create post
//! - GET    /api/posts/:id           - Get post (drafts included)
//! - PATCH  /api/posts/:id           - Update post (PUT is accepted too)
//! - DELETE /api/posts/:id           - Delete post
//! - GET    /api/posts/:id/comments  - List comments for a post
//! - POST   /api/posts/:id/comments  - Create comment
//! - POST   /api/preview             - Render markdown
//! - GET    /api/health              - Store counts

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiJson};
use super::ServerState;
use crate::content::{Comment, NewComment, NewPost, Post, PostPatch};
use crate::store::Storage;

/// Comment body as sent by the post page; the post id comes from the path
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub author: String,
    pub email: String,
    pub content: String,
}

impl CommentRequest {
    /// Check required fields and attach the owning post
    pub fn validate(self, post_id: u64) -> Result<NewComment, ApiError> {
        if self.author.trim().is_empty()
            || self.email.trim().is_empty()
            || self.content.trim().is_empty()
        {
            return Err(ApiError::Validation(
                "Please fill in all fields.".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(ApiError::Validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }

        Ok(NewComment {
            post_id,
            author: self.author,
            email: self.email,
            content: self.content,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_new_post(post: &NewPost) -> Result<(), ApiError> {
    require("title", &post.title)?;
    require("content", &post.content)?;
    require("excerpt", &post.excerpt)
}

fn validate_patch(patch: &PostPatch) -> Result<(), ApiError> {
    let fields = [
        ("title", &patch.title),
        ("content", &patch.content),
        ("excerpt", &patch.excerpt),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            require(name, value)?;
        }
    }
    Ok(())
}

/// GET /api/posts
pub async fn list_posts(State(state): State<Arc<ServerState>>) -> Json<Vec<Post>> {
    Json(state.store.get_posts())
}

/// GET /api/posts/:id
pub async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, ApiError> {
    state
        .store
        .get_post(id)
        .map(Json)
        .ok_or_else(|| ApiError::post_not_found(id))
}

/// POST /api/posts
pub async fn create_post(
    State(state): State<Arc<ServerState>>,
    ApiJson(post): ApiJson<NewPost>,
) -> Result<impl IntoResponse, ApiError> {
    validate_new_post(&post)?;
    let post = state.store.create_post(post);
    tracing::info!("Created post {}: {}", post.id, post.title);
    Ok((StatusCode::CREATED, Json(post)))
}

/// PATCH /api/posts/:id
pub async fn update_post(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    ApiJson(patch): ApiJson<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    validate_patch(&patch)?;
    if patch.is_empty() {
        tracing::debug!("Empty update for post {}", id);
    }

    let post = state
        .store
        .update_post(id, patch)
        .ok_or_else(|| ApiError::post_not_found(id))?;
    tracing::info!("Updated post {}", id);
    Ok(Json(post))
}

/// DELETE /api/posts/:id
pub async fn delete_post(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_post(id) {
        tracing::info!("Deleted post {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::post_not_found(id))
    }
}

/// GET /api/posts/:id/comments
pub async fn list_comments(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Json<Vec<Comment>> {
    Json(state.store.get_comments_by_post_id(id))
}

/// POST /api/posts/:id/comments
pub async fn create_comment(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    ApiJson(request): ApiJson<CommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = state.store.create_comment(request.validate(id)?);
    tracing::info!("New comment {} on post {} by {}", comment.id, id, comment.author);
    Ok((StatusCode::CREATED, Json(comment)))
}

/// POST /api/preview
pub async fn preview(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<PreviewRequest>,
) -> Json<PreviewResponse> {
    Json(PreviewResponse {
        html: state.renderer.render(&request.content),
    })
}

/// GET /api/health
pub async fn health(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "stats": state.store.stats(),
    }))
}
