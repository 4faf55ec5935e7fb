//! Route definitions for the todo collection.
//!
//! Mounted at `/todos` by `api_routes()`.

use axum::routing::{delete, get, patch, put};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes.
///
/// ```text
/// GET    /                   -> list_todos (?completed=, ?priority=)
/// POST   /                   -> create_todo
/// DELETE /all                -> delete_all_todos
/// PUT    /{id}               -> update_todo
/// DELETE /{id}               -> delete_todo
/// PATCH  /{id}/toggle        -> toggle_todo
/// ```
///
/// `/all` is registered as a literal segment, so it always wins over the
/// `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_todos).post(todos::create_todo))
        .route("/all", delete(todos::delete_all_todos))
        .route(
            "/{id}",
            put(todos::update_todo).delete(todos::delete_todo),
        )
        .route("/{id}/toggle", patch(todos::toggle_todo))
}
