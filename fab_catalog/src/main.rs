//! Flesh and Blood catalog export
//!
//! Refreshes the cached card datasets and regenerates `cards.csv`.

use clap::{ArgAction, Parser};
use fab_catalog::{run, PipelineConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Export the Flesh and Blood card dataset as a sorted CSV catalog
#[derive(Parser, Debug)]
#[command(name = "fab_catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// Update cards before generating (bare `-u` means true, `-u=false` disables)
    #[arg(
        short = 'u',
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = false,
        action = ArgAction::Set,
        value_parser = parse_flag_bool
    )]
    update: bool,

    /// Use specific branch
    #[arg(short = 'b', default_value = "develop")]
    branch: String,

    /// Directory holding the cached <locale>.json datasets
    #[arg(long, default_value = "cards")]
    cache_dir: PathBuf,

    /// Path of the generated catalog
    #[arg(short, long, default_value = "cards.csv")]
    output: PathBuf,

    /// Download timeout in seconds
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,
}

/// Boolean spellings accepted by `-u`: 1, t, T, TRUE, true, True and their false counterparts
fn parse_flag_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value '{value}'")),
    }
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            update: args.update,
            branch: args.branch,
            cache_dir: args.cache_dir,
            output: args.output,
            timeout: Duration::from_secs(args.timeout),
            ..PipelineConfig::default()
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::from(Args::parse());

    match run(&config) {
        Ok(summary) => {
            log::info!(
                "Catalog written: {} rows from {} locale(s) to {}",
                summary.rows,
                summary.locales,
                summary.output.display()
            );
        }
        Err(e) => {
            log::error!("{} failed: {}", e.step(), e);
            std::process::exit(1);
        }
    }
}
