//! vary CLI entry point: parse arguments, set up logging, dispatch.

use clap::Parser;
use miette::Result;
use vary_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Manifest(manifest_args) => commands::manifest_execute(manifest_args),
        cli::Command::List(list_args) => commands::list_execute(list_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema(schema_args) => commands::schema_execute(schema_args),
    };

    // A variant that cannot be resolved aborts the build with a non-zero exit.
    result.map_err(error::cli_error_to_miette)
}
