//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves them against the environment into a `GenConfig`
//! - runs the pipeline
//! - writes the artifact or prints a summary

use clap::Parser;
use tracing::info;

use crate::cli::{Command, GenerateArgs, SourceArgs};
use crate::data::cldr::{DEFAULT_CLDR_BASE_URL, DEFAULT_CLDR_REF};
use crate::data::iso::DEFAULT_ISO_URL;
use crate::domain::{CldrSource, GenConfig, IsoSource, OutputFormat};
use crate::error::AppError;

pub mod pipeline;

pub const ENV_ISO_URL: &str = "CURRENCY_DATA_ISO_URL";
pub const ENV_CLDR_BASE_URL: &str = "CURRENCY_DATA_CLDR_BASE_URL";
pub const ENV_CLDR_REF: &str = "CURRENCY_DATA_CLDR_REF";

/// Entry point for the `currency-data` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` is optional.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    setup_tracing(cli.verbose);

    let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
    match cli.command {
        Command::Generate(args) => handle_generate(&args, &env),
        Command::Summary(args) => handle_summary(&args, &env),
    }
}

fn handle_generate(args: &GenerateArgs, env: &dyn Fn(&str) -> Option<String>) -> Result<(), AppError> {
    let config = gen_config_from_args(args, env);
    let run = pipeline::run_pipeline(&config)?;
    let contents = crate::io::render(&run.artifact(), config.format)?;

    if config.to_stdout {
        crate::io::write_stdout(&contents)?;
    } else {
        crate::io::write_file(&config.output, &contents)?;
        info!(path = %config.output.display(), codes = run.catalog.len(), "artifact written");
    }

    Ok(())
}

fn handle_summary(args: &SourceArgs, env: &dyn Fn(&str) -> Option<String>) -> Result<(), AppError> {
    let config = source_config(args, env, OutputFormat::Rust, None, false);
    let run = pipeline::run_pipeline(&config)?;
    println!("{}", crate::report::format_summary(&run));
    Ok(())
}

/// Resolve `generate` flags into a run configuration.
///
/// Precedence for each source setting: CLI flag, then `env`, then built-in default.
pub fn gen_config_from_args(args: &GenerateArgs, env: &dyn Fn(&str) -> Option<String>) -> GenConfig {
    source_config(&args.sources, env, args.format, args.output.clone(), args.stdout)
}

fn source_config(
    sources: &SourceArgs,
    env: &dyn Fn(&str) -> Option<String>,
    format: OutputFormat,
    output: Option<std::path::PathBuf>,
    to_stdout: bool,
) -> GenConfig {
    let iso = match &sources.iso_file {
        Some(path) => IsoSource::File(path.clone()),
        None => IsoSource::Url(
            sources
                .iso_url
                .clone()
                .or_else(|| env(ENV_ISO_URL))
                .unwrap_or_else(|| DEFAULT_ISO_URL.to_string()),
        ),
    };

    let cldr = match &sources.cldr_dir {
        Some(dir) => CldrSource::Dir(dir.clone()),
        None => CldrSource::Remote {
            base_url: sources
                .cldr_base_url
                .clone()
                .or_else(|| env(ENV_CLDR_BASE_URL))
                .unwrap_or_else(|| DEFAULT_CLDR_BASE_URL.to_string()),
            git_ref: sources
                .cldr_ref
                .clone()
                .or_else(|| env(ENV_CLDR_REF))
                .unwrap_or_else(|| DEFAULT_CLDR_REF.to_string()),
        },
    };

    GenConfig {
        iso,
        cldr,
        format,
        output: output.unwrap_or_else(|| format.default_path()),
        to_stdout,
        staging_root: sources.staging_dir.clone(),
        keep_staging: sources.keep_staging,
    }
}

/// Logs go to stderr so `--stdout` output stays clean.
fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("currency_data=debug,warn")
        } else {
            EnvFilter::new("currency_data=info,warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Rewrite argv so `currency-data` defaults to `currency-data generate`.
///
/// Rules:
/// - `currency-data`                      -> `currency-data generate`
/// - `currency-data --cldr-ref 45.0.0 ...` -> `currency-data generate --cldr-ref 45.0.0 ...`
/// - `currency-data --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("generate".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "summary");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "generate flags".
    if arg1.starts_with('-') {
        argv.insert(1, "generate".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn generate_args(sources: SourceArgs) -> GenerateArgs {
        GenerateArgs {
            sources,
            format: OutputFormat::Rust,
            output: None,
            stdout: false,
        }
    }

    #[test]
    fn bare_invocation_means_generate() {
        assert_eq!(rewrite_args(argv(&["currency-data"])), argv(&["currency-data", "generate"]));
        assert_eq!(
            rewrite_args(argv(&["currency-data", "--stdout"])),
            argv(&["currency-data", "generate", "--stdout"])
        );
        assert_eq!(rewrite_args(argv(&["currency-data", "--help"])), argv(&["currency-data", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["currency-data", "summary"])),
            argv(&["currency-data", "summary"])
        );
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let config = gen_config_from_args(&generate_args(SourceArgs::default()), &|_| None);

        assert_eq!(config.iso, IsoSource::Url(DEFAULT_ISO_URL.to_string()));
        assert_eq!(
            config.cldr,
            CldrSource::Remote {
                base_url: DEFAULT_CLDR_BASE_URL.to_string(),
                git_ref: DEFAULT_CLDR_REF.to_string(),
            }
        );
        assert_eq!(config.output, PathBuf::from("data.rs"));
        assert_eq!(config.staging_root, None);
        assert!(!config.keep_staging);
    }

    #[test]
    fn flags_beat_env_and_env_beats_defaults() {
        let env: HashMap<&str, &str> = [
            (ENV_ISO_URL, "https://mirror.test/iso.xml"),
            (ENV_CLDR_REF, "44.1.0"),
        ]
        .into_iter()
        .collect();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let sources = SourceArgs {
            cldr_ref: Some("45.0.0".to_string()),
            ..SourceArgs::default()
        };
        let config = gen_config_from_args(&generate_args(sources), &lookup);

        assert_eq!(config.iso, IsoSource::Url("https://mirror.test/iso.xml".to_string()));
        assert_eq!(
            config.cldr,
            CldrSource::Remote {
                base_url: DEFAULT_CLDR_BASE_URL.to_string(),
                git_ref: "45.0.0".to_string(),
            }
        );
    }

    #[test]
    fn local_sources_win_over_urls() {
        let sources = SourceArgs {
            iso_file: Some(PathBuf::from("list-one.xml")),
            cldr_dir: Some(PathBuf::from("cldr-json")),
            keep_staging: true,
            ..SourceArgs::default()
        };
        let mut args = generate_args(sources);
        args.format = OutputFormat::Json;

        let config = gen_config_from_args(&args, &|_| Some("ignored".to_string()));

        assert_eq!(config.iso, IsoSource::File(PathBuf::from("list-one.xml")));
        assert_eq!(config.cldr, CldrSource::Dir(PathBuf::from("cldr-json")));
        assert_eq!(config.output, PathBuf::from("data.json"));
        assert!(config.keep_staging);
    }
}
