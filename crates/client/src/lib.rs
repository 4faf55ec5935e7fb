//! Client library for the taskbox API.
//!
//! Three layers build on each other:
//!
//! - [`TodoApi`] -- typed HTTP wrapper over the server endpoints.
//! - [`TodoStore`] -- pure in-memory record set with filter and edit state.
//! - [`TodoSession`] -- ties the two together with optimistic updates
//!   that roll back whenever the server refuses a change.

pub mod api;
pub mod session;
pub mod store;
pub mod types;

pub use api::{TodoApi, TodoApiError};
pub use session::TodoSession;
pub use store::{Filter, TodoStore};
pub use types::{NewTodo, Todo, TodoPatch};
