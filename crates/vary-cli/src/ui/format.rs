//! Plain-text rendering of resolved builds and variant tables for stdout.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use vary_config::{ResolvedBuild, VariantRegistry};

use super::colors_enabled;

/// Render a resolved build as aligned `key: value` lines.
///
/// # Examples
///
/// ```
/// use vary_cli::ui::format_resolved;
/// use vary_config::{ResolverSettings, VariantRegistry, VariantResolver};
///
/// let resolver =
///     VariantResolver::new(VariantRegistry::builtin(), ResolverSettings::default()).unwrap();
/// let text = format_resolved(&resolver.resolve("mock", false).unwrap());
/// assert!(text.contains("variants/mock.json"));
/// ```
pub fn format_resolved(build: &ResolvedBuild) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", label("variant:"), build.variant);
    let _ = writeln!(out, "{} {}", label("manifest:"), build.manifest_filename);

    let _ = writeln!(out, "{}", label("entry points:"));
    for (idx, entry) in build.entry_points.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", idx + 1, entry);
    }

    let _ = writeln!(out, "{}", label("constants:"));
    let width = build.constants.keys().map(String::len).max().unwrap_or(0);
    for (name, literal) in &build.constants {
        let _ = writeln!(out, "  {:<width$} = {}", name, literal, width = width);
    }

    out
}

/// One line per variant, marking the default and mock-server variants.
pub fn format_variant_list(registry: &VariantRegistry, default_variant: &str) -> String {
    let mut out = String::new();

    for record in registry {
        let mut tags = Vec::new();
        if record.name == default_variant {
            tags.push("default");
        }
        if record.config.use_mock_server {
            tags.push("mock server");
        }

        let _ = write!(out, "{}", record.name);
        if !tags.is_empty() {
            let _ = write!(out, " ({})", tags.join(", "));
        }
        let _ = writeln!(out, "  {}", record.config.api_base_url);
    }

    out
}

fn label(text: &str) -> String {
    if colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
