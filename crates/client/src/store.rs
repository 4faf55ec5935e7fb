//! Pure client-side state for a todo view.
//!
//! Holds the record set, the active filter, and edit-mode state. All
//! methods are synchronous and never touch the network;
//! [`crate::session::TodoSession`] drives requests and reconciles the
//! results back in.

use chrono::Utc;

use crate::types::{NewTodo, Todo, TodoPatch};

/// Which subset of todos the view is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// The `completed` query value this filter maps to. `All` applies
    /// no constraint.
    pub fn completed_query(self) -> Option<bool> {
        match self {
            Filter::All => None,
            Filter::Active => Some(false),
            Filter::Completed => Some(true),
        }
    }

    /// Whether a record belongs to this filter's view.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Client-side record set with optimistic-update support.
///
/// Placeholder records created by [`TodoStore::insert_local`] carry
/// negative ids, so they can never collide with server-assigned ids.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    filter: Filter,
    editing: Option<i64>,
    next_local_id: i64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records currently held, newest first.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Records visible under the active filter.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .collect()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Replace the whole record set with a server listing.
    pub fn set_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Clone the record set for a later [`TodoStore::restore`].
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Restore a snapshot taken before an optimistic change.
    pub fn restore(&mut self, snapshot: Vec<Todo>) {
        self.todos = snapshot;
    }

    /// Insert a placeholder record for a not-yet-confirmed create and
    /// return its local id.
    ///
    /// The placeholder goes to the front, matching the newest-first
    /// order of server listings, and mirrors the server-side defaults
    /// for absent fields.
    pub fn insert_local(&mut self, input: &NewTodo) -> i64 {
        self.next_local_id -= 1;
        let id = self.next_local_id;
        let now = Utc::now();
        self.todos.insert(
            0,
            Todo {
                id,
                title: input.title.clone(),
                description: input.description.clone().unwrap_or_default(),
                priority: input
                    .priority
                    .clone()
                    .unwrap_or_else(|| "medium".to_string()),
                completed: false,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    /// Swap the record with `id` for a server-confirmed version,
    /// keeping its position. Returns `false` when the record is unknown.
    pub fn replace(&mut self, id: i64, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Flip the completed flag locally. Returns `false` when the record
    /// is unknown.
    pub fn apply_toggle(&mut self, id: i64) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Apply a patch locally. Provided fields overwrite, absent fields
    /// keep their values. Returns `false` when the record is unknown.
    pub fn apply_patch(&mut self, id: i64, patch: &TodoPatch) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                if let Some(ref title) = patch.title {
                    todo.title = title.clone();
                }
                if let Some(ref description) = patch.description {
                    todo.description = description.clone();
                }
                if let Some(ref priority) = patch.priority {
                    todo.priority = priority.clone();
                }
                if let Some(completed) = patch.completed {
                    todo.completed = completed;
                }
                true
            }
            None => false,
        }
    }

    /// Remove a record locally. Returns `false` when the record is
    /// unknown.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() < before
    }

    // ---- edit mode ----

    /// Record id currently being edited, if any.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Enter edit mode for a record. Returns `false` when the record is
    /// unknown.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        if self.todos.iter().any(|t| t.id == id) {
            self.editing = Some(id);
            true
        } else {
            false
        }
    }

    /// Leave edit mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Leave edit mode, returning the id that was being edited.
    pub fn take_editing(&mut self) -> Option<i64> {
        self.editing.take()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
