use clap::builder::FalseyValueParser;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available vary subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a variant into constants, entry points and a manifest path
    ///
    /// Prints what a bundler needs to build the variant. Nothing is written.
    Resolve(ResolveArgs),

    /// Write the variant manifest for a finished build
    ///
    /// Lists the emitted stylesheets and scripts in variants/<name>.json
    /// under the output directory.
    Manifest(ManifestArgs),

    /// List the registered variants
    List(ListArgs),

    /// Validate the variants file
    ///
    /// Checks for duplicate names, empty fields, malformed URLs and hostnames,
    /// and an unregistered default variant.
    Check(CheckArgs),

    /// Print the JSON Schema of the variants file
    Schema(SchemaArgs),
}

/// Where to find the project and its settings
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to vary.config.json (defaults to <cwd>/vary.config.json if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Variants file (defaults to variants.toml, variants.json or package.json)
    #[arg(long = "variants", value_name = "FILE")]
    pub variants_file: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Variant to resolve
    ///
    /// Examples:
    ///   vary resolve public
    ///   VARY_VARIANT=mock vary resolve
    #[arg(env = "VARY_VARIANT", value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Resolve for the local development server
    ///
    /// The manifest path then uses the default variant's name.
    #[arg(long, env = "VARY_SERVE", value_parser = FalseyValueParser::new())]
    pub serve: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the manifest command
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Variant the build was made for
    #[arg(env = "VARY_VARIANT", value_name = "VARIANT")]
    pub variant: Option<String>,

    /// The build is served by the local development server
    #[arg(long, env = "VARY_SERVE", value_parser = FalseyValueParser::new())]
    pub serve: bool,

    /// Build output directory (default: build)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Public path prefixed to scanned assets (default: /)
    #[arg(long, value_name = "PREFIX")]
    pub public_path: Option<String>,

    /// Asset URLs to list instead of scanning the output directory
    ///
    /// May be repeated. Files ending in .css go to "css", .js/.mjs/.cjs to
    /// "scripts"; anything else is ignored.
    #[arg(short, long = "asset", value_name = "URL")]
    pub assets: Vec<String>,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also check that the entry modules exist
    #[arg(long)]
    pub entries: bool,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the schema command
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Print the schema of vary.config.json instead
    #[arg(long)]
    pub settings: bool,

    /// Write the schema to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
