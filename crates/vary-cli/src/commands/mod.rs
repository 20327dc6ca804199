//! Command implementations for the vary CLI.
//!
//! - [`resolve`] - Print a resolved variant
//! - [`manifest`] - Write the variant manifest
//! - [`list`] - List variants
//! - [`check`] - Validate the variants file
//! - [`schema`] - Print the variants file schema
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod list;
pub mod manifest;
pub mod resolve;
pub mod schema;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use list::execute as list_execute;
pub use manifest::execute as manifest_execute;
pub use resolve::execute as resolve_execute;
pub use schema::execute as schema_execute;
