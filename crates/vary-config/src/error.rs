//! Error types for variant loading, validation, and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Resolution errors
    #[error("no variant name was given")]
    MissingVariantName,

    #[error("no variant found called {name:?} (available: {})", .available.join(", "))]
    VariantNotFound {
        name: String,
        available: Vec<String>,
    },

    // Registry construction errors
    #[error("variant {0:?} is defined more than once")]
    DuplicateVariant(String),

    #[error("default variant {0:?} is not registered")]
    UnknownDefaultVariant(String),

    #[error("variant {variant:?} has an empty `{field}`")]
    EmptyField {
        variant: String,
        field: &'static str,
    },

    #[error("invalid value for `{field}`{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    // File loading errors
    #[error("unsupported variants file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
