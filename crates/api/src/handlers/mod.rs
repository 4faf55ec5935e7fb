//! Request handlers.
//!
//! Each submodule provides async handler functions for one route group.
//! Handlers delegate to the corresponding repository in `taskbox_db` and
//! map errors via [`crate::error::AppError`].

pub mod posts;
pub mod todos;
