//! Resolver settings shared by every variant.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_VARIANT_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolverSettings {
    /// Variant whose manifest name is used while serving locally
    #[serde(default = "default_variant")]
    pub default_variant: String,

    /// Application entry modules, in bundling order
    #[serde(default = "default_app_entries")]
    pub app_entries: Vec<String>,

    /// Module that starts the mock server; runs before the application
    #[serde(default = "default_mock_entry")]
    pub mock_entry: String,

    /// Directory (relative to the build output) that holds variant manifests
    #[serde(default = "default_manifest_dir")]
    pub manifest_dir: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            default_variant: default_variant(),
            app_entries: default_app_entries(),
            mock_entry: default_mock_entry(),
            manifest_dir: default_manifest_dir(),
        }
    }
}

fn default_variant() -> String {
    DEFAULT_VARIANT_NAME.to_string()
}

fn default_app_entries() -> Vec<String> {
    vec!["src/index.ts".to_string()]
}

fn default_mock_entry() -> String {
    "src/mockServer.ts".to_string()
}

fn default_manifest_dir() -> String {
    "variants".to_string()
}
