//! Command-line parsing for the currency data generator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! reconciliation code. Resolution of flags against the environment happens in
//! `app`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::OutputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "currency-data",
    version,
    about = "Generate currency and parent-locale tables from ISO 4217 and CLDR"
)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch both sources, reconcile them, and write the generated table.
    Generate(GenerateArgs),
    /// Fetch and reconcile, then print a summary without writing anything.
    Summary(SourceArgs),
}

/// Where to read the ISO registry and the CLDR corpus from.
#[derive(Debug, Args, Clone, Default)]
pub struct SourceArgs {
    /// ISO 4217 list-one XML URL [env: CURRENCY_DATA_ISO_URL].
    #[arg(long, value_name = "URL", conflicts_with = "iso_file")]
    pub iso_url: Option<String>,

    /// Read the ISO 4217 XML from a local file instead of fetching it.
    #[arg(long, value_name = "PATH")]
    pub iso_file: Option<PathBuf>,

    /// Raw-file base URL of the cldr-json repository [env: CURRENCY_DATA_CLDR_BASE_URL].
    #[arg(long, value_name = "URL", conflicts_with = "cldr_dir")]
    pub cldr_base_url: Option<String>,

    /// cldr-json git tag or branch [env: CURRENCY_DATA_CLDR_REF].
    #[arg(long, value_name = "REF", conflicts_with = "cldr_dir")]
    pub cldr_ref: Option<String>,

    /// Read CLDR JSON from a local cldr-json checkout (the directory holding `cldr-core/`).
    #[arg(long, value_name = "DIR")]
    pub cldr_dir: Option<PathBuf>,

    /// Create the staging directory for downloaded CLDR files under DIR.
    #[arg(long, value_name = "DIR", conflicts_with = "cldr_dir")]
    pub staging_dir: Option<PathBuf>,

    /// Keep the staging directory with downloaded CLDR files.
    #[arg(long)]
    pub keep_staging: bool,
}

/// Options for `generate`.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Artifact format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Rust)]
    pub format: OutputFormat,

    /// Output path (default: data.rs, or data.json for --format json).
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the artifact to stdout instead of a file.
    #[arg(long)]
    pub stdout: bool,
}
