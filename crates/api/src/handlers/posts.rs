//! Handler for the post echo endpoint.
//!
//! Accepts a post payload, checks field presence, and echoes it back with
//! a generated id. Nothing is persisted.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Incoming post payload. Both fields are checked for presence.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Echoed post with its generated id.
#[derive(Debug, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// POST /posts
///
/// Validate presence of `title` and `content`, then echo the post back.
pub async fn create_post(Json(input): Json<CreatePost>) -> AppResult<impl IntoResponse> {
    let title = input
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?;
    let content = input
        .content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Content is required".to_string()))?;

    let post = Post {
        id: Uuid::new_v4().to_string(),
        title,
        content,
    };

    Ok((StatusCode::CREATED, Json(DataResponse::new(post))))
}
