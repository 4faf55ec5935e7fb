//! Handlers for the todo collection.
//!
//! Provides endpoints for creating, listing, updating, toggling, and
//! deleting todos. Validation runs before any database access; the
//! repositories never see an invalid title or priority.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use taskbox_core::error::CoreError;
use taskbox_core::todo::{validate_priority, validate_title};
use taskbox_core::types::DbId;
use taskbox_db::models::todo::{CreateTodo, TodoFilter, UpdateTodo};
use taskbox_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for listing todos.
///
/// `completed` is kept as a raw string: only the literal values `"true"`
/// and `"false"` constrain the listing, anything else is ignored.
#[derive(Debug, serde::Deserialize)]
pub struct ListTodoParams {
    pub completed: Option<String>,
    pub priority: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /todos?completed=&priority=
///
/// List todos, newest first, optionally filtered.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListTodoParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref priority) = params.priority {
        validate_priority(priority).map_err(AppError::BadRequest)?;
    }

    let filter = TodoFilter {
        completed: params.completed.as_deref().and_then(|v| match v {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }),
        priority: params.priority,
    };

    let todos = TodoRepo::list(&state.pool, &filter).await?;

    Ok(Json(DataResponse::new(todos)))
}

/// POST /todos
///
/// Create a new todo. The title is required, trimmed, and length-checked;
/// description and priority fall back to their defaults.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let title = validate_title(input.title.as_deref().unwrap_or_default())
        .map_err(AppError::BadRequest)?;
    if let Some(ref priority) = input.priority {
        validate_priority(priority).map_err(AppError::BadRequest)?;
    }

    let todo = TodoRepo::create(&state.pool, &title, &input).await?;

    tracing::info!(todo_id = todo.id, title = %todo.title, "Todo created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(todo))))
}

/// PUT /todos/{id}
///
/// Partially update a todo. Absent fields keep their stored values;
/// provided fields are validated before the write.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        let normalized = validate_title(title).map_err(AppError::BadRequest)?;
        input.title = Some(normalized);
    }
    if let Some(ref priority) = input.priority {
        validate_priority(priority).map_err(AppError::BadRequest)?;
    }

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(DataResponse::new(todo)))
}

/// PATCH /todos/{id}/toggle
///
/// Flip the completed state of a todo.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::toggle_completed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo toggled");

    Ok(Json(DataResponse::new(todo)))
}

/// DELETE /todos/{id}
///
/// Delete a single todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(MessageResponse::new("Todo deleted")))
}

/// DELETE /todos/all
///
/// Delete every todo in the collection.
pub async fn delete_all_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let removed = TodoRepo::delete_all(&state.pool).await?;

    tracing::info!(removed, "All todos deleted");

    Ok(Json(MessageResponse::new("All todos deleted")))
}
