//! Command-line interface definition for vary.
//!
//! # Command Structure
//!
//! - `vary resolve` - Print the constants, entry points and manifest path of a variant
//! - `vary manifest` - Write `variants/<name>.json` for a finished build
//! - `vary list` - List registered variants
//! - `vary check` - Validate the variants file and entry modules
//! - `vary schema` - Print the JSON Schema of the variants file

mod commands;

use clap::Parser;

pub use commands::{
    CheckArgs, Command, ListArgs, ManifestArgs, ProjectArgs, ResolveArgs, SchemaArgs,
};

/// vary - build variant resolution for web application bundles
#[derive(Parser, Debug)]
#[command(
    name = "vary",
    version,
    about = "Resolve build variants and write variant asset manifests",
    long_about = "vary selects one named build variant (production, mock, feature branch, ...),\n\
                  prints the compile-time constants and entry points a bundler needs for it,\n\
                  and writes the variants/<name>.json manifest listing the built assets."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
