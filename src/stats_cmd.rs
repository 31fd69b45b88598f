//! `nombres stats`: quick counts over a merged names file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nombres::records::load_records;
use nombres::stats::Stats;

/// Print entry, gender and origin counts for a names file
///
/// Examples:
///   nombres stats nombres_completos.json
#[derive(Args, Debug)]
#[command(verbatim_doc_comment)]
pub struct StatsArgs {
    /// JSON array file to summarize
    pub file: PathBuf,
}

pub fn run(args: &StatsArgs) -> Result<()> {
    let records = load_records(&args.file)?;
    print!("{}", Stats::compute(&records));
    Ok(())
}
