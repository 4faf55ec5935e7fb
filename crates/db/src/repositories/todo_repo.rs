//! Repository for the `todos` table.

use chrono::Utc;
use sqlx::SqlitePool;
use taskbox_core::todo::DEFAULT_PRIORITY;
use taskbox_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, TodoFilter, UpdateTodo};

/// Column list for todos queries.
const COLUMNS: &str = "id, title, description, priority, completed, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Create a new todo, returning the created row.
    ///
    /// `title` is the already-validated, trimmed title. Description and
    /// priority fall back to their defaults when absent from the input.
    pub async fn create(
        pool: &SqlitePool,
        title: &str,
        input: &CreateTodo,
    ) -> Result<Todo, sqlx::Error> {
        let now = Utc::now();
        let description = input.description.as_deref().unwrap_or("");
        let priority = input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY);
        let query = format!(
            "INSERT INTO todos (title, description, priority, completed, created_at, updated_at)
             VALUES (?, ?, ?, FALSE, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(title)
            .bind(description)
            .bind(priority)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos, newest first, applying any filter constraints.
    ///
    /// Ties on `created_at` fall back to `id` so that ordering stays
    /// stable when rows are created within the same instant.
    pub async fn list(pool: &SqlitePool, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let mut conditions: Vec<&str> = Vec::new();

        if filter.completed.is_some() {
            conditions.push("completed = ?");
        }
        if filter.priority.is_some() {
            conditions.push("priority = ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM todos \
             {where_clause} \
             ORDER BY created_at DESC, id DESC"
        );

        let mut q = sqlx::query_as::<_, Todo>(&query);

        if let Some(completed) = filter.completed {
            q = q.bind(completed);
        }
        if let Some(ref priority) = filter.priority {
            q = q.bind(priority);
        }

        q.fetch_all(pool).await
    }

    /// Update a todo by ID, returning the updated row.
    ///
    /// Absent fields keep their stored values; `updated_at` is always
    /// refreshed.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "UPDATE todos SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                priority = COALESCE(?, priority),
                completed = COALESCE(?, completed),
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(input.completed)
            .bind(now)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip the completed state of a todo.
    pub async fn toggle_completed(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "UPDATE todos SET completed = NOT completed, updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(now)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every todo, returning the number of rows removed.
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
