//! Route definitions for the post echo endpoint.
//!
//! Mounted at `/posts` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Post routes.
///
/// ```text
/// POST   /                   -> create_post (echo-only, no persistence)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(posts::create_post))
}
