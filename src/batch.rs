//! Input handling shared by `join` and `dedupe`.
//!
//! Both commands resolve tokens to files the same way and load them with the
//! same skip-with-warning policy; only what happens to the concatenated
//! records differs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use nombres::expand::{absolutize, expand_inputs};
use nombres::records::{Concatenation, concat_files};

/// Resolve `tokens` to input files, excluding `out`.
///
/// Invalid patterns are reported as warnings. Fails when nothing resolves.
pub fn resolve_inputs(tokens: &[String], out: &Path) -> Result<Vec<PathBuf>> {
    let expansion = expand_inputs(tokens, out).context("could not determine working directory")?;
    for (pattern, err) in &expansion.invalid_patterns {
        eprintln!("warning: invalid pattern '{pattern}': {err}");
    }
    if expansion.files.is_empty() {
        bail!(
            "no input files matched the given paths or patterns.\n  \
             The output file ({}) is never used as an input.",
            out.display()
        );
    }
    Ok(expansion.files)
}

/// Print the ordered list of files about to be combined.
pub fn print_file_list(files: &[PathBuf]) {
    println!("Merging {} file(s):", files.len());
    for file in files {
        println!("  - {}", file.display());
    }
}

/// Load and concatenate `files`, warning on stderr about each skipped file.
pub fn load_inputs(files: &[PathBuf]) -> Concatenation {
    let loaded = concat_files(files);
    for err in &loaded.skipped {
        eprintln!("warning: {err}; skipped");
    }
    loaded
}

/// Absolute form of a user-supplied path, for display.
pub fn display_path(path: &Path) -> PathBuf {
    std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| absolutize(path, &cwd))
}
