//! Input expansion: command-line tokens → ordered list of input files.
//!
//! Tokens containing any of `* ? [ ]` are glob patterns; everything else is a
//! literal path. Every candidate is made absolute (lexically, relative to the
//! working directory), then:
//!
//! - the declared output path is removed, so `--out merged.json *.json` never
//!   reads its own previous output;
//! - duplicates collapse to their first occurrence;
//! - anything that is not an existing regular file is dropped silently;
//! - the survivors are stably sorted by the natural order of their base name.
//!
//! An empty result is not an error here; callers decide that nothing to
//! merge is fatal.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};
use nombres_core::natural_key;
use tracing::instrument;

/// Characters that turn a token into a glob pattern.
pub const WILDCARDS: [char; 4] = ['*', '?', '[', ']'];

/// Returns `true` if `token` should be expanded as a glob pattern.
#[must_use]
pub fn has_wildcard(token: &str) -> bool {
    token.contains(WILDCARDS)
}

/// Result of [`expand_inputs`].
#[derive(Debug, Default)]
pub struct Expansion {
    /// Absolute, deduplicated, naturally ordered input files.
    pub files: Vec<PathBuf>,
    /// Patterns that could not be compiled; they contribute no files.
    pub invalid_patterns: Vec<(String, PatternError)>,
}

/// Expand `tokens` relative to the process working directory.
///
/// # Errors
/// Returns an error if the current directory cannot be determined.
pub fn expand_inputs(tokens: &[String], out_path: &Path) -> std::io::Result<Expansion> {
    let cwd = std::env::current_dir()?;
    Ok(expand_inputs_in(tokens, out_path, &cwd))
}

/// Expand `tokens`, resolving relative tokens and `out_path` against `cwd`.
#[instrument(skip_all, fields(tokens = tokens.len(), cwd = %cwd.display()))]
pub fn expand_inputs_in(tokens: &[String], out_path: &Path, cwd: &Path) -> Expansion {
    let mut expansion = Expansion::default();
    let mut candidates: Vec<PathBuf> = Vec::new();

    for token in tokens {
        if has_wildcard(token) {
            match glob_matches(token, cwd) {
                Ok(matches) => candidates.extend(matches),
                Err(e) => {
                    tracing::warn!(pattern = %token, error = %e, "invalid glob pattern");
                    expansion.invalid_patterns.push((token.clone(), e));
                }
            }
        } else {
            candidates.push(PathBuf::from(token));
        }
    }

    let out_abs = absolutize(out_path, cwd);
    let mut seen: HashSet<PathBuf> = HashSet::new();
    for candidate in candidates {
        let abs = absolutize(&candidate, cwd);
        if abs == out_abs {
            tracing::debug!(path = %abs.display(), "excluding output path from inputs");
            continue;
        }
        if !seen.contains(&abs) && abs.is_file() {
            seen.insert(abs.clone());
            expansion.files.push(abs);
        }
    }

    expansion.files.sort_by_cached_key(|p| natural_key(p));
    tracing::debug!(files = expansion.files.len(), "inputs expanded");
    expansion
}

/// All filesystem matches of `pattern`, relative patterns anchored at `cwd`.
///
/// Like a shell, `*` and `?` do not match a leading `.` in a file name.
fn glob_matches(pattern: &str, cwd: &Path) -> Result<Vec<PathBuf>, PatternError> {
    let anchored = if Path::new(pattern).is_absolute() {
        pattern.to_owned()
    } else {
        let base = Pattern::escape(&cwd.to_string_lossy());
        format!("{}/{pattern}", base.trim_end_matches('/'))
    };

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut matches = Vec::new();
    for entry in glob::glob_with(&anchored, options)? {
        match entry {
            Ok(path) => matches.push(path),
            Err(e) => tracing::debug!(error = %e, "unreadable glob entry skipped"),
        }
    }
    Ok(matches)
}

/// Make `path` absolute against `cwd` and fold `.` / `..` lexically.
///
/// Symlinks are not resolved, so two different links to one file count as
/// two inputs.
#[must_use]
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
