//! Plain-text audit report of a dedup run.
//!
//! ```text
//! Duplicates detected: 2
//! Key: nombre, keep=first, case_sensitive=false, keep_accents=false
//!
//! ana  (kept: 0, duplicate: 2)
//! luis  (kept: 1, duplicate: 5)
//! ```

use std::fmt::Write as _;

use crate::dedupe::{DedupeConfig, DedupeOutcome};

/// Render the audit report for `outcome` produced under `config`.
#[must_use]
pub fn render(outcome: &DedupeOutcome, config: &DedupeConfig) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Duplicates detected: {}", outcome.removed());
    let _ = writeln!(
        out,
        "Key: {}, keep={}, case_sensitive={}, keep_accents={}",
        config.key, config.keep, config.case_sensitive, config.keep_accents
    );
    out.push('\n');
    for dup in &outcome.duplicates {
        let _ = writeln!(
            out,
            "{}  (kept: {}, duplicate: {})",
            dup.key, dup.kept, dup.duplicate
        );
    }
    out
}
