//! Schema command implementation.

use crate::cli::SchemaArgs;
use crate::config::VaryConfig;
use crate::error::{Result, ResultExt};
use crate::ui;
use vary_config::VariantsFile;

/// Execute the schema command.
pub fn execute(args: SchemaArgs) -> Result<()> {
    let schema = if args.settings {
        VaryConfig::json_schema()
    } else {
        serde_json::to_value(schemars::schema_for!(VariantsFile))?
    };
    let rendered = serde_json::to_string_pretty(&schema)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered + "\n").with_path(&path)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
