//! Optimistic update flows.
//!
//! Every mutating call applies the change to the local store first, then
//! issues the request. On success the server record replaces the local
//! guess; on any failure the store is restored to its pre-change
//! snapshot, so the view never keeps a change the server refused.

use crate::api::{TodoApi, TodoApiError};
use crate::store::{Filter, TodoStore};
use crate::types::{NewTodo, TodoPatch};

/// A [`TodoStore`] kept in sync with a server through [`TodoApi`].
pub struct TodoSession {
    api: TodoApi,
    store: TodoStore,
}

impl TodoSession {
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            store: TodoStore::new(),
        }
    }

    /// Read-only view of the underlying store.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Re-fetch the listing for the active filter.
    pub async fn refresh(&mut self) -> Result<(), TodoApiError> {
        let todos = self
            .api
            .list_todos(self.store.filter().completed_query(), None)
            .await?;
        self.store.set_todos(todos);
        Ok(())
    }

    /// Switch filters and re-fetch the matching listing.
    pub async fn set_filter(&mut self, filter: Filter) -> Result<(), TodoApiError> {
        self.store.set_filter(filter);
        self.refresh().await
    }

    /// Create a todo optimistically. Returns the server-assigned id.
    pub async fn add(&mut self, input: NewTodo) -> Result<i64, TodoApiError> {
        let snapshot = self.store.snapshot();
        let local_id = self.store.insert_local(&input);

        match self.api.create_todo(&input).await {
            Ok(todo) => {
                let id = todo.id;
                self.store.replace(local_id, todo);
                Ok(id)
            }
            Err(err) => {
                self.store.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Flip a todo's completed state optimistically.
    pub async fn toggle(&mut self, id: i64) -> Result<(), TodoApiError> {
        let snapshot = self.store.snapshot();
        self.store.apply_toggle(id);

        match self.api.toggle_todo(id).await {
            Ok(todo) => {
                self.store.replace(id, todo);
                Ok(())
            }
            Err(err) => {
                self.store.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Patch a todo optimistically.
    pub async fn update(&mut self, id: i64, patch: TodoPatch) -> Result<(), TodoApiError> {
        let snapshot = self.store.snapshot();
        self.store.apply_patch(id, &patch);

        match self.api.update_todo(id, &patch).await {
            Ok(todo) => {
                self.store.replace(id, todo);
                Ok(())
            }
            Err(err) => {
                self.store.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Delete a todo optimistically.
    pub async fn remove(&mut self, id: i64) -> Result<(), TodoApiError> {
        let snapshot = self.store.snapshot();
        self.store.remove(id);

        match self.api.delete_todo(id).await {
            Ok(_message) => Ok(()),
            Err(err) => {
                self.store.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Clear the whole collection optimistically.
    pub async fn remove_all(&mut self) -> Result<(), TodoApiError> {
        let snapshot = self.store.snapshot();
        self.store.set_todos(Vec::new());

        match self.api.delete_all_todos().await {
            Ok(_message) => Ok(()),
            Err(err) => {
                self.store.restore(snapshot);
                Err(err)
            }
        }
    }

    // ---- edit mode ----

    /// Enter edit mode for a record. Nothing is sent until
    /// [`TodoSession::save_edit`].
    pub fn begin_edit(&mut self, id: i64) -> bool {
        self.store.begin_edit(id)
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
    }

    /// Save the active edit as a patch. Returns `Ok(false)` when no edit
    /// is active (nothing is sent). Edit mode ends either way; a refused
    /// patch rolls the records back.
    pub async fn save_edit(&mut self, patch: TodoPatch) -> Result<bool, TodoApiError> {
        let Some(id) = self.store.take_editing() else {
            return Ok(false);
        };
        self.update(id, patch).await?;
        Ok(true)
    }
}
