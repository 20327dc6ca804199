//! Error handling for the vary CLI.
//!
//! Library errors from `vary-config` are wrapped in [`CliError`] and converted
//! to a `miette` report at the top of `main`, which also gives the process a
//! non-zero exit status.
//!
//! # Example
//!
//! ```rust,no_run
//! use vary_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_assets(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;
pub use vary_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Variant loading, validation, or resolution failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Layered CLI settings could not be extracted
    #[error("Invalid settings: {0}\n\nHint: Check vary.config.json syntax and VARY_* environment variables")]
    Settings(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a `NotFound` I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint line to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Config(ConfigError::Io(io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::MissingVariantName.into();
        assert!(matches!(cli_err, CliError::Config(ConfigError::MissingVariantName)));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let cli_err: CliError = ConfigError::DuplicateVariant("mock".into()).into();
        assert_eq!(cli_err.to_string(), "variant \"mock\" is defined more than once");
    }

    #[test]
    fn test_result_ext_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let err = result.with_path("/test/variants.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_result_ext_with_path_through_config_error() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::Io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        ));

        let err = result.with_path("variants.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(p) if p == PathBuf::from("variants.toml")));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::MissingVariantName);

        let err = result.with_hint("Pass a variant name").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no variant name was given"));
        assert!(msg.contains("Hint: Pass a variant name"));
    }
}
