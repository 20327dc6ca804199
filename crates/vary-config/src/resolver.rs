//! Variant resolution: name in, compile-time constants and entry points out.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::registry::VariantRegistry;
use crate::settings::ResolverSettings;
use crate::validation::check_settings;

/// Everything a bundler needs to build one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBuild {
    /// Name of the variant that was resolved
    pub variant: String,

    /// Constant name to JSON literal, ready to splice into compiled output
    pub constants: IndexMap<String, String>,

    /// Entry modules in execution order
    pub entry_points: Vec<String>,

    /// Manifest path relative to the build output, e.g. `variants/mock.json`
    pub manifest_filename: String,
}

impl ResolvedBuild {
    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants.get(name).map(String::as_str)
    }
}

/// Resolves variant names against an immutable registry.
///
/// # Example
///
/// ```
/// use vary_config::{ResolverSettings, VariantRegistry, VariantResolver};
///
/// let resolver =
///     VariantResolver::new(VariantRegistry::builtin(), ResolverSettings::default()).unwrap();
///
/// let build = resolver.resolve("mock", false).unwrap();
/// assert_eq!(build.entry_points, vec!["src/mockServer.ts", "src/index.ts"]);
/// assert_eq!(build.manifest_filename, "variants/mock.json");
///
/// let served = resolver.resolve("mock", true).unwrap();
/// assert_eq!(served.manifest_filename, "variants/public.json");
/// ```
#[derive(Debug, Clone)]
pub struct VariantResolver {
    registry: VariantRegistry,
    settings: ResolverSettings,
}

impl VariantResolver {
    /// Create a resolver.
    ///
    /// Fails if the settings name no entry module, if the manifest directory
    /// would leave the build output, or if the default variant is not
    /// registered.
    pub fn new(registry: VariantRegistry, settings: ResolverSettings) -> Result<Self> {
        check_settings(&settings)?;

        if !registry.contains(&settings.default_variant) {
            return Err(ConfigError::UnknownDefaultVariant(
                settings.default_variant.clone(),
            ));
        }

        Ok(Self { registry, settings })
    }

    pub fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Resolve `requested` into a [`ResolvedBuild`].
    ///
    /// Never falls back to the default variant: an unknown name is an error,
    /// since the constants carry environment-specific endpoints and credentials.
    pub fn resolve(&self, requested: &str, serve: bool) -> Result<ResolvedBuild> {
        if requested.trim().is_empty() {
            return Err(ConfigError::MissingVariantName);
        }

        let record =
            self.registry
                .find_by_name(requested)
                .ok_or_else(|| ConfigError::VariantNotFound {
                    name: requested.to_string(),
                    available: self.registry.names().map(str::to_string).collect(),
                })?;

        let constants = record
            .config
            .constant_sources()
            .into_iter()
            .map(|(name, value)| (name.to_string(), json_literal(value)))
            .collect();

        let mut entry_points = Vec::with_capacity(self.settings.app_entries.len() + 1);
        if record.config.use_mock_server {
            entry_points.push(self.settings.mock_entry.clone());
        }
        entry_points.extend(self.settings.app_entries.iter().cloned());

        let manifest_filename = self.manifest_filename(&record.name, serve);

        tracing::debug!(
            variant = %record.name,
            serve,
            mock = record.config.use_mock_server,
            manifest = %manifest_filename,
            "resolved variant"
        );

        Ok(ResolvedBuild {
            variant: record.name.clone(),
            constants,
            entry_points,
            manifest_filename,
        })
    }

    /// Manifest path for `variant`. While serving, the default variant's
    /// manifest name is used so local pages need no variant query parameter.
    pub fn manifest_filename(&self, variant: &str, serve: bool) -> String {
        let name = if serve {
            self.settings.default_variant.as_str()
        } else {
            variant
        };
        format!(
            "{}/{}.json",
            self.settings.manifest_dir.trim_end_matches('/'),
            name
        )
    }
}

fn json_literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
