//! Build-variant resolution and manifest generation.
//!
//! A [`VariantRegistry`] holds the named variants, a [`VariantResolver`] turns
//! a requested name into a [`ResolvedBuild`], and a [`VariantManifest`] lists
//! the emitted assets in `variants/<name>.json`.

pub mod assets;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod validation;
pub mod variant;

// Re-export main types
pub use error::*;
pub use manifest::*;
pub use registry::*;
pub use resolver::*;
pub use settings::*;
pub use variant::*;

// Re-export discovery, assets and validation
pub use assets::collect_assets;
pub use discovery::{load_file, VariantDiscovery, VariantsFile, VARIANT_FILES};
pub use validation::{missing_entries, validate_registry, SchemaValidator, VariantValidator};
