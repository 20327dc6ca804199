//! List command implementation.

use serde_json::json;

use crate::cli::ListArgs;
use crate::config::{CliOverrides, VaryConfig};
use crate::error::Result;
use crate::ui;

/// Execute the list command.
pub fn execute(args: ListArgs) -> Result<()> {
    let (config, root) = VaryConfig::load(&args.project, CliOverrides::default())?;
    let resolver = config.resolver(&root)?;
    let default_variant = &resolver.settings().default_variant;

    if args.json {
        let variants: Vec<_> = resolver.registry().iter().collect();
        let value = json!({
            "defaultVariant": default_variant,
            "variants": variants,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!(
            "{}",
            ui::format_variant_list(resolver.registry(), default_variant)
        );
    }

    Ok(())
}
