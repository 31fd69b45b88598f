use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use nombres::config::{CONFIG_FILE, NombresConfig};
use nombres::telemetry;

mod batch;
mod dedupe_cmd;
mod generate_cmd;
mod join_cmd;
mod stats_cmd;

/// Batch tools for a generated names dataset
///
/// Names are produced in batches (one JSON array per file) and later
/// combined into a single dataset. These commands cover each step.
///
/// QUICK START:
///
///   # Generate batches from a CSV of names
///   nombres generate --in nombres.csv --out nombres_1.json --max 500
///   nombres generate --in nombres.csv --out nombres_2.json --skip 500 --max 500
///
///   # Merge them, dropping repeated names
///   nombres dedupe --out nombres_completos.json 'nombres_*.json'
///
///   # Look at what you got
///   nombres stats nombres_completos.json
///
/// CONFIGURATION:
///
///   Defaults for dedupe and generate can be set in ./nombres.toml
///   (or the file given by --config). Command-line flags always win.
///   Set NOMBRES_LOG=debug (or NOMBRES_LOG=json) to trace to stderr.
#[derive(Parser)]
#[command(name = "nombres")]
#[command(version, about)]
#[command(propagate_version = true)]
#[command(verbatim_doc_comment)]
#[command(after_help = "See 'nombres <command> --help' for more information on a specific command.")]
struct Cli {
    /// Config file to read defaults from [default: ./nombres.toml]
    #[arg(long, global = true, env = "NOMBRES_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge JSON arrays and remove duplicate names
    Dedupe(dedupe_cmd::DedupeArgs),

    /// Concatenate JSON arrays without deduplication
    Join(join_cmd::JoinArgs),

    /// Show entry, gender and origin counts for a names file
    Stats(stats_cmd::StatsArgs),

    /// Generate described name entries from a CSV file
    Generate(generate_cmd::GenerateArgs),
}

fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Dedupe(ref args) => {
            let config = load_config(cli.config.as_deref())?;
            dedupe_cmd::run(args, &config.dedupe)
        }
        Commands::Join(ref args) => join_cmd::run(args),
        Commands::Stats(ref args) => stats_cmd::run(args),
        Commands::Generate(ref args) => {
            let config = load_config(cli.config.as_deref())?;
            generate_cmd::run(args, &config.generate)
        }
    }
}

/// Load the config file. An explicitly named file must exist; the default
/// one is optional.
fn load_config(explicit: Option<&Path>) -> Result<NombresConfig> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
            Ok(NombresConfig::load(path)?)
        }
        None => Ok(NombresConfig::load(Path::new(CONFIG_FILE))?),
    }
}
