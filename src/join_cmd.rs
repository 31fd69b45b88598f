//! `nombres join`: concatenate batch files without deduplication.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nombres::records::write_json;

use crate::batch::{display_path, load_inputs, print_file_list, resolve_inputs};

/// Concatenate JSON arrays into one file, keeping every record
///
/// Files are read in natural order of their names. Use `dedupe` instead to
/// drop repeated names.
///
/// Examples:
///   nombres join --out nombres_completos.json 'nombres_*.json'
///   nombres join --out all.json a.json b.json c.json
#[derive(Args, Debug)]
#[command(verbatim_doc_comment)]
pub struct JoinArgs {
    /// Output JSON file (excluded from the inputs even if a pattern matches it)
    #[arg(long)]
    pub out: PathBuf,

    /// Input files or glob patterns
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<String>,
}

pub fn run(args: &JoinArgs) -> Result<()> {
    let inputs = resolve_inputs(&args.files, &args.out)?;
    print_file_list(&inputs);

    let loaded = load_inputs(&inputs);
    write_json(&args.out, &loaded.records)?;

    println!();
    println!("Total combined: {} entries", loaded.records.len());
    println!("Saved to:       {}", display_path(&args.out).display());
    Ok(())
}
