//! `nombres dedupe`: combine batch files and drop duplicate names.
//!
//! Pipeline: expand inputs → load each file → concatenate → dedupe →
//! optional audit report → write output → summary on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nombres::config::{DedupeOverrides, DedupeSection};
use nombres::records::write_json;
use nombres_core::{KeepPolicy, dedupe, report};

use crate::batch::{display_path, load_inputs, print_file_list, resolve_inputs};

/// Merge JSON arrays and remove records with duplicate keys
///
/// Files are read in natural order of their names (batch_2 before
/// batch_10). Keys are compared case-insensitively and without accents
/// unless told otherwise; surviving records keep their original order.
///
/// Examples:
///   nombres dedupe --out nombres_completos.json 'nombres_*.json'
///   nombres dedupe --out all.json a.json b.json --keep last --report dups.txt
#[derive(Args, Debug)]
#[command(verbatim_doc_comment)]
#[allow(clippy::struct_excessive_bools)]
pub struct DedupeArgs {
    /// Output JSON file (excluded from the inputs even if a pattern matches it)
    #[arg(long)]
    pub out: PathBuf,

    /// Input files or glob patterns
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,

    /// Record field to deduplicate on [default: nombre]
    #[arg(long)]
    pub key: Option<String>,

    /// Which record to keep when keys collide: first or last [default: first]
    #[arg(long, value_name = "POLICY")]
    pub keep: Option<KeepPolicy>,

    /// Compare keys without lowercasing
    #[arg(long, overrides_with = "no_case_sensitive")]
    pub case_sensitive: bool,

    /// Lowercase keys even if nombres.toml sets case_sensitive
    #[arg(long, overrides_with = "case_sensitive")]
    pub no_case_sensitive: bool,

    /// Compare keys without stripping accents
    #[arg(long, overrides_with = "no_keep_accents")]
    pub keep_accents: bool,

    /// Strip accents even if nombres.toml sets keep_accents
    #[arg(long, overrides_with = "keep_accents")]
    pub no_keep_accents: bool,

    /// Write a duplicate audit report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn run(args: &DedupeArgs, defaults: &DedupeSection) -> Result<()> {
    let config = defaults.resolve(DedupeOverrides {
        key: args.key.clone(),
        keep: args.keep,
        case_sensitive: flag_pair(args.case_sensitive, args.no_case_sensitive),
        keep_accents: flag_pair(args.keep_accents, args.no_keep_accents),
    });

    let inputs = resolve_inputs(&args.files, &args.out)?;
    print_file_list(&inputs);

    let loaded = load_inputs(&inputs);
    let outcome = dedupe(loaded.records, &config);

    if let Some(report_path) = &args.report {
        std::fs::write(report_path, report::render(&outcome, &config))
            .with_context(|| format!("could not write report {}", report_path.display()))?;
    }

    write_json(&args.out, &outcome.records)?;

    println!();
    println!("Records read:        {}", outcome.total);
    println!("Duplicates removed:  {}", outcome.removed());
    println!(
        "Key used:            {}  (keep={}, case_sensitive={}, keep_accents={})",
        config.key, config.keep, config.case_sensitive, config.keep_accents
    );
    println!("Saved to:            {}", display_path(&args.out).display());
    if let Some(report_path) = &args.report {
        println!("Report:              {}", display_path(report_path).display());
    }
    Ok(())
}

/// `--x` / `--no-x` to an override; clap keeps only the last one given.
const fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
