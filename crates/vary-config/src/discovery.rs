//! File-based variant discovery for CLI use
//!
//! Variants live in data, not code: a project can describe any number of them
//! in `variants.toml`, `variants.json`, or a `variants` field in
//! `package.json`. When none of those exist the built-in table is used.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::registry::VariantRegistry;
use crate::resolver::VariantResolver;
use crate::settings::ResolverSettings;
use crate::validation::validate_registry;
use crate::variant::VariantRecord;

/// File names searched, in order.
pub const VARIANT_FILES: [&str; 2] = ["variants.toml", "variants.json"];

/// On-disk shape of a variants file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VariantsFile {
    #[serde(flatten)]
    pub settings: ResolverSettings,

    pub variants: Vec<VariantRecord>,
}

impl VariantsFile {
    /// Create from serde_json::Value (for variants stored in another document)
    ///
    /// # Example
    ///
    /// ```
    /// use vary_config::VariantsFile;
    /// use serde_json::json;
    ///
    /// let file = VariantsFile::from_value(json!({
    ///     "defaultVariant": "prod",
    ///     "variants": [{
    ///         "name": "prod",
    ///         "config": {
    ///             "apiBaseUrl": "https://api.example.com",
    ///             "authAudience": "https://example.com/api",
    ///             "authClientId": "X1",
    ///             "authDomain": "example.auth0.com",
    ///             "useMockServer": false
    ///         }
    ///     }]
    /// }))
    /// .unwrap();
    ///
    /// let build = file.into_resolver().unwrap().resolve("prod", true).unwrap();
    /// assert_eq!(build.manifest_filename, "variants/prod.json");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "variants".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// The built-in variants with default settings.
    pub fn builtin() -> Self {
        Self {
            settings: ResolverSettings::default(),
            variants: VariantRegistry::builtin().iter().cloned().collect(),
        }
    }

    /// Build, validate, and wrap the registry in a resolver.
    pub fn into_resolver(self) -> Result<VariantResolver> {
        let registry = VariantRegistry::new(self.variants)?;
        validate_registry(&registry)?;
        VariantResolver::new(registry, self.settings)
    }
}

/// File-based variant discovery
///
/// # Example
///
/// ```no_run
/// use vary_config::VariantDiscovery;
///
/// let resolver = VariantDiscovery::new(".").load_or_builtin().unwrap().into_resolver().unwrap();
/// let build = resolver.resolve("public", false).unwrap();
/// ```
pub struct VariantDiscovery {
    root: PathBuf,
}

impl VariantDiscovery {
    /// Create a new variant discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a variants file in the root directory
    ///
    /// Searches in this order:
    /// 1. variants.toml
    /// 2. variants.json
    /// 3. package.json (variants field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in VARIANT_FILES {
            let path = self.root.join(name);
            if path.exists() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        let parsed = fs::read_to_string(&pkg_path)
            .ok()
            .and_then(|content| serde_json::from_str::<Value>(&content).ok())?;
        parsed
            .get("variants")
            .is_some_and(|v| !v.is_null())
            .then_some(pkg_path)
    }

    /// Load the discovered variants file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` with `NotFound` if no variants file exists.
    pub fn load(&self) -> Result<VariantsFile> {
        let path = self.find().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no variants file in {}", self.root.display()),
            )
        })?;
        load_file(&path)
    }

    /// Load the discovered variants file, or the built-in table if none exists.
    pub fn load_or_builtin(&self) -> Result<VariantsFile> {
        match self.find() {
            Some(path) => load_file(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no variants file, using built-in variants");
                Ok(VariantsFile::builtin())
            }
        }
    }
}

/// Load a variants file by path, choosing the parser from its name.
pub fn load_file(path: &Path) -> Result<VariantsFile> {
    tracing::debug!(path = %path.display(), "loading variants");

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_from_package_json(path);
    }

    let content = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => {
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("Invalid TOML syntax: {}", e)),
                })?;

            let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {}", e)),
            })?;

            VariantsFile::from_value(value)
        }
        Some("json") => {
            let value: Value =
                serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "json".to_string(),
                    hint: Some(format!("Invalid JSON: {}", e)),
                })?;
            VariantsFile::from_value(value)
        }
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn load_from_package_json(path: &Path) -> Result<VariantsFile> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get("variants") {
        Some(value) if !value.is_null() => VariantsFile::from_value(value.clone()),
        _ => Err(ConfigError::InvalidValue {
            field: "variants".to_string(),
            hint: Some("Add a 'variants' field to your package.json".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TOML: &str = r#"
defaultVariant = "prod"

[[variants]]
name = "prod"

[variants.config]
apiBaseUrl = "https://api.example.com"
authAudience = "https://example.com/api"
authClientId = "X1"
authDomain = "example.auth0.com"
useMockServer = false
"#;

    #[test]
    fn find_returns_none_when_no_file() {
        let dir = TempDir::new().unwrap();
        assert!(VariantDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_prefers_toml_over_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("variants.toml"), TOML).unwrap();
        fs::write(dir.path().join("variants.json"), "{}").unwrap();

        let found = VariantDiscovery::new(dir.path()).find().unwrap();
        assert_eq!(found, dir.path().join("variants.toml"));
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"app"}"#).unwrap();
        assert!(VariantDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_parses_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("variants.toml"), TOML).unwrap();

        let file = VariantDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(file.settings.default_variant, "prod");
        assert_eq!(file.settings.mock_entry, "src/mockServer.ts");
        assert_eq!(file.variants.len(), 1);
    }

    #[test]
    fn load_without_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        match VariantDiscovery::new(dir.path()).load().unwrap_err() {
            ConfigError::Io(err) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_or_builtin_falls_back() {
        let dir = TempDir::new().unwrap();
        let file = VariantDiscovery::new(dir.path()).load_or_builtin().unwrap();
        assert_eq!(file, VariantsFile::builtin());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("variants.yaml");
        fs::write(&path, "variants: []").unwrap();
        assert!(matches!(
            load_file(&path).unwrap_err(),
            ConfigError::UnsupportedFormat(_)
        ));
    }
}
