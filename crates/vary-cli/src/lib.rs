//! vary CLI - build variant resolution for web application bundles.
//!
//! The heavy lifting lives in `vary-config`; this crate layers settings,
//! logging, terminal output and error reporting on top of it.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand
//! - [`config`] - settings from vary.config.json, `VARY_*` and flags
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and text formatting

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
