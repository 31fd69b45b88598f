//! `nombres generate`: build enriched name entries from a CSV source.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nombres::config::GenerateSection;
use nombres::generate::{GenerateOptions, generate_from_csv, parse_types};
use nombres::records::write_json;

use crate::batch::display_path;

/// Generate a JSON batch of described names from a CSV file
///
/// The CSV needs a header row with a `Nombre` column; `Género` and `Origen`
/// are optional. The same seed always produces the same batch.
///
/// Examples:
///   nombres generate --in nombres.csv --out nombres_1.json --max 500
///   nombres generate --in nombres.csv --out nombres_2.json --skip 500 --max 500
///   nombres generate --in nombres.csv --out poeticos.json --types poetica fantastica
#[derive(Args, Debug)]
#[command(verbatim_doc_comment)]
pub struct GenerateArgs {
    /// CSV file with the source names
    #[arg(long = "in", value_name = "CSV")]
    pub input: PathBuf,

    /// Output JSON file
    #[arg(long)]
    pub out: PathBuf,

    /// Data rows to skip before generating
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Maximum entries to generate (0 = all remaining rows)
    #[arg(long, default_value_t = 0)]
    pub max: usize,

    /// RNG seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Preferred story types: historica, biblica, mitologica, poetica, fantastica
    #[arg(long, num_args = 1..)]
    pub types: Vec<String>,
}

pub fn run(args: &GenerateArgs, defaults: &GenerateSection) -> Result<()> {
    let requested = if args.types.is_empty() {
        &defaults.types
    } else {
        &args.types
    };
    let (types, rejected) = parse_types(requested);
    for raw in rejected {
        eprintln!("warning: unknown story type '{raw}' ignored");
    }

    let options = GenerateOptions {
        skip: args.skip,
        max: args.max,
        seed: args.seed.unwrap_or(defaults.seed),
        types,
    };
    let entries = generate_from_csv(&args.input, &options)?;
    write_json(&args.out, &entries)?;

    println!(
        "Wrote {} entries to {} (skip={}, max={})",
        entries.len(),
        display_path(&args.out).display(),
        args.skip,
        args.max
    );
    Ok(())
}
