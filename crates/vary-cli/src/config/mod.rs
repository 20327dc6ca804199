//! CLI settings with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and vary.config.json.
//! Priority: CLI > Environment > File > Defaults

mod loading;
mod tests;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vary_config::{load_file, VariantDiscovery, VariantResolver};

use crate::error::{Result, ResultExt};

pub use loading::CliOverrides;

/// Settings file name looked up in the project directory.
pub const CONFIG_FILE: &str = "vary.config.json";

/// vary settings - loaded from vary.config.json, VARY_* variables, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VaryConfig {
    /// Variants file; discovered in the project directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants_file: Option<PathBuf>,

    /// Build output directory the manifest is written into
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Public path prefixed to scanned asset paths
    #[serde(default = "default_public_path")]
    pub public_path: String,
}

impl Default for VaryConfig {
    fn default() -> Self {
        Self {
            variants_file: None,
            out_dir: default_out_dir(),
            public_path: default_public_path(),
        }
    }
}

impl VaryConfig {
    /// Load variants and build the resolver for the project at `root`.
    pub fn resolver(&self, root: &Path) -> Result<VariantResolver> {
        let file = match &self.variants_file {
            Some(path) => {
                let path = resolve_path(path, root);
                load_file(&path).with_path(&path)?
            }
            None => VariantDiscovery::new(root).load_or_builtin()?,
        };

        Ok(file.into_resolver()?)
    }

    /// Output directory resolved against `root`.
    pub fn out_dir_in(&self, root: &Path) -> PathBuf {
        resolve_path(&self.out_dir, root)
    }

    /// Generate JSON Schema for vary.config.json.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(VaryConfig)).unwrap_or_default()
    }
}

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_public_path() -> String {
    "/".to_string()
}
