//! Check command implementation.
//!
//! Validates the variants file without resolving anything.

use crate::cli::CheckArgs;
use crate::config::{CliOverrides, VaryConfig};
use crate::error::{CliError, Result};
use crate::ui;
use vary_config::missing_entries;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load settings and the variants file
/// 2. Build the registry (duplicates, empty fields, URL and hostname shape)
/// 3. Confirm the default variant is registered
/// 4. Check entry modules exist (with `--entries`)
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking variants...");

    let (config, root) = VaryConfig::load(&args.project, CliOverrides::default())?;
    let resolver = config.resolver(&root)?;

    ui::success(&format!(
        "{} variants are valid (default: {})",
        resolver.registry().len(),
        resolver.settings().default_variant
    ));

    if args.entries {
        ui::info("Checking entry modules...");
        let missing = missing_entries(resolver.settings(), &root);
        if !missing.is_empty() {
            for path in &missing {
                ui::error(&format!("Entry module not found: {}", path.display()));
            }
            return Err(CliError::Custom(format!(
                "{} entry module(s) not found\n\nHint: Check `appEntries` and `mockEntry` in the variants file",
                missing.len()
            )));
        }
        ui::success("Entry modules exist");
    }

    ui::success("All checks passed!");
    Ok(())
}
