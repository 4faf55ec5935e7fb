pub mod health;
pub mod posts;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos                 list (?completed=, ?priority=), create
/// /todos/all             delete all (DELETE)
/// /todos/{id}            update (PUT), delete (DELETE)
/// /todos/{id}/toggle     flip completed (PATCH)
///
/// /posts                 create (POST, echo-only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/todos", todos::router())
        .nest("/posts", posts::router())
}
