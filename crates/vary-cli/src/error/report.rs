//! Miette diagnostic conversion for CLI errors.

use miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::MissingVariantName => miette::miette!(
            "You must specify a variant name.\n\nHint: vary resolve <VARIANT>, or set VARY_VARIANT"
        ),
        ConfigError::VariantNotFound { name, available } => miette::miette!(
            "No variant found called {:?}\n\nHint: Available variants: {}",
            name,
            available.join(", ")
        ),
        ConfigError::DuplicateVariant(name) => miette::miette!(
            "Variant {:?} is defined more than once\n\nHint: Variant names must be unique",
            name
        ),
        ConfigError::UnknownDefaultVariant(name) => miette::miette!(
            "Default variant {:?} is not registered\n\nHint: Set `defaultVariant` to one of the defined variants",
            name
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_report_lists_available() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::VariantNotFound {
            name: "staging".into(),
            available: vec!["public".into(), "mock".into()],
        }));
        let msg = report.to_string();
        assert!(msg.contains("\"staging\""));
        assert!(msg.contains("public, mock"));
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::FileNotFound("vary.config.json".into()));
        assert_eq!(report.to_string(), "File not found: vary.config.json");
    }
}
