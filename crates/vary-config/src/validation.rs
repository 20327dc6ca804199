//! Pluggable variant validation strategies
//!
//! Construction of a [`VariantRegistry`](crate::VariantRegistry) only enforces
//! that every field is filled in. The validators here go further and check
//! that URLs and hostnames are well formed, and that entry modules exist.

use std::path::{Component, Path, PathBuf};

use url::{Host, Url};

use crate::error::{ConfigError, Result};
use crate::registry::VariantRegistry;
use crate::settings::ResolverSettings;
use crate::variant::VariantRecord;

/// Trait for pluggable variant validation strategies
pub trait VariantValidator {
    /// Validate a single variant record
    fn validate(&self, record: &VariantRecord) -> Result<()>;

    /// Validate every record in a registry, stopping at the first failure
    fn validate_all(&self, registry: &VariantRegistry) -> Result<()> {
        registry.iter().try_for_each(|record| self.validate(record))
    }
}

/// Shape validation (no filesystem or network checks)
///
/// # Example
///
/// ```
/// use vary_config::{SchemaValidator, VariantRegistry, VariantValidator};
///
/// let registry = VariantRegistry::builtin();
/// SchemaValidator.validate_all(&registry).unwrap();
/// ```
pub struct SchemaValidator;

impl VariantValidator for SchemaValidator {
    fn validate(&self, record: &VariantRecord) -> Result<()> {
        check_required_fields(record)?;

        let config = &record.config;

        let api = parse_url(&record.name, "apiBaseUrl", &config.api_base_url)?;
        if !matches!(api.scheme(), "http" | "https") {
            return Err(invalid(
                &record.name,
                "apiBaseUrl",
                format!("expected an http(s) URL, got scheme `{}`", api.scheme()),
            ));
        }

        parse_url(&record.name, "authAudience", &config.auth_audience)?;

        match Host::parse(&config.auth_domain) {
            Ok(Host::Domain(_)) => {}
            Ok(_) => {
                return Err(invalid(
                    &record.name,
                    "authDomain",
                    "expected a hostname, not an IP address".to_string(),
                ));
            }
            Err(err) => {
                return Err(invalid(
                    &record.name,
                    "authDomain",
                    format!("expected a bare hostname like `tenant.auth0.com` ({err})"),
                ));
            }
        }

        Ok(())
    }
}

/// Check that every string field of a record is non-empty.
pub(crate) fn check_required_fields(record: &VariantRecord) -> Result<()> {
    check_variant_name(&record.name)?;

    for (field, value) in record.config.string_fields() {
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                variant: record.name.clone(),
                field,
            });
        }
    }

    Ok(())
}

/// Variant names become manifest file names, so they are limited to
/// `[A-Za-z0-9._-]` and may not be `.` or `..`.
fn check_variant_name(name: &str) -> Result<()> {
    let hint = if name.trim().is_empty() {
        "variant names cannot be empty".to_string()
    } else if name == "." || name == ".." {
        format!("{name:?} is not a valid variant name")
    } else if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        format!("{name:?} contains {c:?}; use only letters, digits, '.', '_' and '-'")
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidValue {
        field: "name".to_string(),
        hint: Some(hint),
    })
}

/// Check resolver settings: entry modules must be named and the manifest
/// directory must stay inside the build output.
pub(crate) fn check_settings(settings: &ResolverSettings) -> Result<()> {
    if settings.app_entries.is_empty() {
        return Err(setting_error("appEntries", "at least one entry module is required"));
    }
    if settings.app_entries.iter().any(|entry| entry.trim().is_empty()) {
        return Err(setting_error("appEntries", "entry modules cannot be empty"));
    }
    if settings.mock_entry.trim().is_empty() {
        return Err(setting_error("mockEntry", "the mock entry module cannot be empty"));
    }

    let manifest_dir = settings.manifest_dir.trim_end_matches('/');
    if manifest_dir.trim().is_empty() {
        return Err(setting_error("manifestDir", "the manifest directory cannot be empty"));
    }
    let path = Path::new(manifest_dir);
    if path.has_root()
        || path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(setting_error(
            "manifestDir",
            "must be a relative path inside the build output, without `..`",
        ));
    }

    Ok(())
}

fn setting_error(field: &str, hint: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        hint: Some(hint.to_string()),
    }
}

/// Check that the configured entry modules exist under `root`.
///
/// Returns the paths that are missing; an empty list means everything exists.
pub fn missing_entries(settings: &ResolverSettings, root: impl AsRef<Path>) -> Vec<PathBuf> {
    let root = root.as_ref();
    settings
        .app_entries
        .iter()
        .chain(std::iter::once(&settings.mock_entry))
        .map(|entry| root.join(entry))
        .filter(|path| !path.exists())
        .collect()
}

/// Convenience function for shape validation of a whole registry
pub fn validate_registry(registry: &VariantRegistry) -> Result<()> {
    SchemaValidator.validate_all(registry)
}

fn parse_url(variant: &str, field: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|err| invalid(variant, field, format!("{value:?} is not a URL ({err})")))
}

fn invalid(variant: &str, field: &str, hint: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: format!("{variant}.{field}"),
        hint: Some(hint),
    }
}
