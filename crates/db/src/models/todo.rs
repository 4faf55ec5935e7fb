//! Todo model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbox_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo.
///
/// Every field is optional at the wire level so that missing fields
/// produce validation errors instead of deserialization failures. The
/// title is validated and normalized before it reaches the repository.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
}

/// DTO for updating a todo. Absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub completed: Option<bool>,
}

/// Filter for listing todos. `None` fields do not constrain the query.
#[derive(Debug, Default)]
pub struct TodoFilter {
    pub completed: Option<bool>,
    pub priority: Option<String>,
}
