//! Enumerate emitted stylesheets and scripts under a build output directory.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;
use crate::manifest::AssetKind;

/// Collect the public URLs of every CSS and script file under `out_dir`.
///
/// Paths are made relative to `out_dir`, joined with `/`, prefixed with
/// `public_path`, and returned sorted so the manifest is stable between runs.
pub fn collect_assets(out_dir: impl AsRef<Path>, public_path: &str) -> Result<Vec<String>> {
    let out_dir = out_dir.as_ref();
    let prefix = public_path.trim_end_matches('/');
    let mut assets = Vec::new();

    for entry in WalkDir::new(out_dir).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(out_dir) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if AssetKind::of(&relative).is_some() {
            assets.push(format!("{prefix}/{relative}"));
        }
    }

    assets.sort();
    tracing::debug!(dir = %out_dir.display(), count = assets.len(), "collected build assets");
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn collects_css_and_js_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "assets/js/main.9f8e.js");
        touch(dir.path(), "assets/js/main.9f8e.js.map");
        touch(dir.path(), "assets/css/main.1a2b.css");
        touch(dir.path(), "assets/images/5d6c.png");
        touch(dir.path(), "assets/js/vendor.0000.js");

        let assets = collect_assets(dir.path(), "/").unwrap();
        assert_eq!(
            assets,
            vec![
                "/assets/css/main.1a2b.css",
                "/assets/js/main.9f8e.js",
                "/assets/js/vendor.0000.js",
            ]
        );
    }

    #[test]
    fn public_path_prefix_is_applied() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "app.js");

        let assets = collect_assets(dir.path(), "https://cdn.example.com/build/").unwrap();
        assert_eq!(assets, vec!["https://cdn.example.com/build/app.js"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(collect_assets(dir.path().join("nope"), "/").is_err());
    }
}
