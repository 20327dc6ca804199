//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::config::{CliOverrides, VaryConfig};
use crate::error::Result;
use crate::ui;
use vary_config::ResolvedBuild;

/// Execute the resolve command.
///
/// Prints the resolved build to stdout, as text or as JSON with `--json`.
///
/// # Errors
///
/// Returns errors for a missing or unknown variant name and for invalid
/// variants files.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let build = resolve(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&build)?);
    } else {
        print!("{}", ui::format_resolved(&build));
    }

    Ok(())
}

/// Resolve the requested variant without printing anything.
pub fn resolve(args: &ResolveArgs) -> Result<ResolvedBuild> {
    let (config, root) = VaryConfig::load(&args.project, CliOverrides::default())?;
    let resolver = config.resolver(&root)?;

    let build = resolver.resolve(args.variant.as_deref().unwrap_or_default(), args.serve)?;
    tracing::debug!(variant = %build.variant, serve = args.serve, "resolved");
    Ok(build)
}
