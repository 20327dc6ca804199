//! Manifest command implementation.
//!
//! Writes `variants/<name>.json` into the build output. The asset list comes
//! from `--asset` values when given, otherwise from scanning the output
//! directory for stylesheets and scripts.

use std::path::PathBuf;

use crate::cli::ManifestArgs;
use crate::config::{CliOverrides, VaryConfig};
use crate::error::{Result, ResultExt};
use crate::ui;
use vary_config::{collect_assets, VariantManifest};

/// Execute the manifest command.
///
/// # Process
///
/// 1. Load settings (CLI > Env > File > Defaults)
/// 2. Resolve the variant (fails on a missing or unknown name)
/// 3. Collect assets
/// 4. Write the manifest and print its path to stdout
pub fn execute(args: ManifestArgs) -> Result<()> {
    let path = write_manifest(&args)?;
    ui::success(&format!("Wrote {}", path.display()));
    println!("{}", path.display());
    Ok(())
}

/// Resolve, collect and write. Returns the path of the written manifest.
pub fn write_manifest(args: &ManifestArgs) -> Result<PathBuf> {
    let overrides = CliOverrides {
        out_dir: args.out_dir.clone(),
        public_path: args.public_path.clone(),
        ..CliOverrides::default()
    };
    let (config, root) = VaryConfig::load(&args.project, overrides)?;
    let resolver = config.resolver(&root)?;

    let build = resolver.resolve(args.variant.as_deref().unwrap_or_default(), args.serve)?;
    let out_dir = config.out_dir_in(&root);

    let assets = if args.assets.is_empty() {
        collect_assets(&out_dir, &config.public_path)
            .with_path(&out_dir)
            .with_hint("Run the bundler first, or pass the assets with --asset")?
    } else {
        args.assets.clone()
    };

    let manifest = VariantManifest::from_assets(&assets);
    if manifest.is_empty() {
        ui::warning(&format!(
            "No stylesheets or scripts found for {}",
            build.variant
        ));
    }

    Ok(manifest.write(&out_dir, &build.manifest_filename)?)
}
