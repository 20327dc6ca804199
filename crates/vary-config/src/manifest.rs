//! The per-variant asset manifest written next to the build output.
//!
//! A deployment reads `variants/<name>.json` to learn which stylesheets and
//! scripts to load for that variant.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantManifest {
    pub css: Vec<String>,
    pub scripts: Vec<String>,
}

impl VariantManifest {
    /// Split an asset list into stylesheets and scripts, keeping order.
    ///
    /// Anything that is neither (images, source maps, other manifests) is
    /// left out.
    ///
    /// # Example
    ///
    /// ```
    /// use vary_config::VariantManifest;
    ///
    /// let manifest = VariantManifest::from_assets([
    ///     "/assets/css/main.1a2b.css",
    ///     "/assets/js/main.3c4d.js",
    ///     "/assets/js/main.3c4d.js.map",
    /// ]);
    /// assert_eq!(manifest.css, vec!["/assets/css/main.1a2b.css"]);
    /// assert_eq!(manifest.scripts, vec!["/assets/js/main.3c4d.js"]);
    /// ```
    pub fn from_assets<I, S>(assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut manifest = Self::default();
        for asset in assets {
            let asset = asset.as_ref();
            match AssetKind::of(asset) {
                Some(AssetKind::Css) => manifest.css.push(asset.to_string()),
                Some(AssetKind::Script) => manifest.scripts.push(asset.to_string()),
                None => {}
            }
        }
        manifest
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.scripts.is_empty()
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn render(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "manifest".to_string(),
            hint: Some(e.to_string()),
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Write the manifest to `out_dir/manifest_filename`, creating parent
    /// directories. Returns the full path written.
    pub fn write(&self, out_dir: impl AsRef<Path>, manifest_filename: &str) -> Result<PathBuf> {
        let path = out_dir.as_ref().join(manifest_filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.render()?)?;

        tracing::info!(
            path = %path.display(),
            css = self.css.len(),
            scripts = self.scripts.len(),
            "wrote variant manifest"
        );
        Ok(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssetKind {
    Css,
    Script,
}

impl AssetKind {
    pub(crate) fn of(asset: &str) -> Option<Self> {
        // Ignore query strings and fragments on public URLs.
        let path = asset.split(['?', '#']).next().unwrap_or(asset);
        let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
        match ext.to_ascii_lowercase().as_str() {
            "css" => Some(Self::Css),
            "js" | "mjs" | "cjs" => Some(Self::Script),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(AssetKind::of("a.css"), Some(AssetKind::Css));
        assert_eq!(AssetKind::of("a.MJS"), Some(AssetKind::Script));
        assert_eq!(AssetKind::of("/js/a.js?v=3"), Some(AssetKind::Script));
        assert_eq!(AssetKind::of("a.js.map"), None);
        assert_eq!(AssetKind::of("images/logo.png"), None);
        assert_eq!(AssetKind::of("LICENSE"), None);
    }

    #[test]
    fn render_has_css_and_scripts_keys() {
        let manifest = VariantManifest::from_assets(["/a.css", "/b.js"]);
        let value: Value = serde_json::from_str(&manifest.render().unwrap()).unwrap();
        assert_eq!(value, json!({ "css": ["/a.css"], "scripts": ["/b.js"] }));
    }

    #[test]
    fn empty_manifest_still_renders_both_keys() {
        let manifest = VariantManifest::default();
        assert!(manifest.is_empty());
        let value: Value = serde_json::from_str(&manifest.render().unwrap()).unwrap();
        assert_eq!(value, json!({ "css": [], "scripts": [] }));
    }

    #[test]
    fn write_creates_variants_directory() {
        let dir = TempDir::new().unwrap();
        let manifest = VariantManifest::from_assets(["/assets/js/main.js"]);
        let path = manifest.write(dir.path(), "variants/mock.json").unwrap();

        assert_eq!(path, dir.path().join("variants/mock.json"));
        let written: VariantManifest =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, manifest);
    }
}
