//! Domain types, errors, and validation rules shared by the taskbox crates.

pub mod error;
pub mod todo;
pub mod types;
