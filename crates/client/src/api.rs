//! REST API client for the taskbox HTTP endpoints.
//!
//! Wraps the todo CRUD surface (list, create, update, toggle, delete)
//! using [`reqwest`]. Every server reply is a `{ success, data | message }`
//! envelope; error replies carry the server's message in
//! [`TodoApiError::Api`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::types::{NewTodo, Todo, TodoPatch};

/// HTTP client for a single taskbox server.
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

/// Response envelope wrapping every server reply.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    message: Option<String>,
}

/// Errors from the taskbox REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum TodoApiError {
    /// The HTTP request itself failed (network, DNS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error envelope, or the raw body when the
        /// reply was not an envelope.
        message: String,
    },

    /// A 2xx reply arrived without the expected payload field.
    #[error("API response missing expected payload")]
    MissingPayload,
}

impl TodoApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across sessions).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// List todos, newest first.
    ///
    /// Sends a `GET /api/todos` request. `completed` and `priority`
    /// constrain the listing when present.
    pub async fn list_todos(
        &self,
        completed: Option<bool>,
        priority: Option<&str>,
    ) -> Result<Vec<Todo>, TodoApiError> {
        let mut request = self.client.get(format!("{}/api/todos", self.base_url));
        if let Some(completed) = completed {
            request = request.query(&[("completed", completed.to_string())]);
        }
        if let Some(priority) = priority {
            request = request.query(&[("priority", priority)]);
        }

        let response = request.send().await?;
        Self::parse_data(response).await
    }

    /// Create a todo.
    ///
    /// Sends a `POST /api/todos` request and returns the stored record
    /// with its server-assigned id and timestamps.
    pub async fn create_todo(&self, input: &NewTodo) -> Result<Todo, TodoApiError> {
        let response = self
            .client
            .post(format!("{}/api/todos", self.base_url))
            .json(input)
            .send()
            .await?;

        Self::parse_data(response).await
    }

    /// Partially update a todo.
    ///
    /// Sends a `PUT /api/todos/{id}` request with only the fields set in
    /// `patch`; the server keeps stored values for the rest.
    pub async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, TodoApiError> {
        let response = self
            .client
            .put(format!("{}/api/todos/{}", self.base_url, id))
            .json(patch)
            .send()
            .await?;

        Self::parse_data(response).await
    }

    /// Flip a todo's completed state.
    ///
    /// Sends a `PATCH /api/todos/{id}/toggle` request with no body.
    pub async fn toggle_todo(&self, id: i64) -> Result<Todo, TodoApiError> {
        let response = self
            .client
            .patch(format!("{}/api/todos/{}/toggle", self.base_url, id))
            .send()
            .await?;

        Self::parse_data(response).await
    }

    /// Delete a todo, returning the server's confirmation message.
    pub async fn delete_todo(&self, id: i64) -> Result<String, TodoApiError> {
        let response = self
            .client
            .delete(format!("{}/api/todos/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse_message(response).await
    }

    /// Delete every todo, returning the server's confirmation message.
    pub async fn delete_all_todos(&self) -> Result<String, TodoApiError> {
        let response = self
            .client
            .delete(format!("{}/api/todos/all", self.base_url))
            .send()
            .await?;

        Self::parse_message(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`TodoApiError::Api`] carrying
    /// the envelope message (or raw body) on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, TodoApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(body);
            return Err(TodoApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Parse the `data` payload out of a successful envelope.
    async fn parse_data<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TodoApiError> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<Envelope<T>>().await?;
        envelope.data.ok_or(TodoApiError::MissingPayload)
    }

    /// Parse the `message` field out of a successful envelope.
    async fn parse_message(response: reqwest::Response) -> Result<String, TodoApiError> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<Envelope<serde_json::Value>>().await?;
        envelope.message.ok_or(TodoApiError::MissingPayload)
    }
}
