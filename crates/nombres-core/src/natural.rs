//! Natural ("human") ordering of file names.
//!
//! Batch files are named after the row ranges they cover, e.g.
//! `nombres_1_100.json`, `nombres_101_200.json`, `nombres_1001_1100.json`.
//! Plain lexicographic ordering would put `1001` before `101`; natural
//! ordering compares embedded digit runs as integers instead.
//!
//! A [`NaturalKey`] is built from the base name of a path by splitting it on
//! maximal ASCII digit runs:
//!
//! ```text
//! "nombres_2_100.json" → ["nombres_", 2, "_", 100, ".json"]
//! "10a"                → ["", 10, "a"]
//! "a1"                 → ["a", 1, ""]
//! ```
//!
//! Segments always alternate text / number / text / ..., starting with a
//! (possibly empty) text segment, so two keys compare position by position
//! with like against like. Text compares case-insensitively.

use std::cmp::Ordering;
use std::path::Path;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One piece of a [`NaturalKey`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Segment {
    /// A run of non-digit characters, lowercased.
    Text(String),
    /// A maximal run of ASCII digits, compared by integer value.
    Number(Digits),
}

/// A digit run stored without leading zeros.
///
/// Comparing by `(length, digits)` orders runs of any length numerically,
/// so names with very long numeric runs never overflow an integer type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn from_run(run: &str) -> Self {
        Self(run.trim_start_matches('0').to_owned())
    }

    /// The numeric value if it fits in a `u64`.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        if self.0.is_empty() {
            return Some(0);
        }
        self.0.parse().ok()
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NaturalKey
// ---------------------------------------------------------------------------

/// Sort key for natural ordering of a file name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey {
    segments: Vec<Segment>,
}

impl NaturalKey {
    /// Build a key from an arbitrary string (no base-name extraction).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = name;

        loop {
            let digit_start = rest.find(|c: char| c.is_ascii_digit());
            let Some(start) = digit_start else {
                segments.push(Segment::Text(rest.to_lowercase()));
                break;
            };
            segments.push(Segment::Text(rest[..start].to_lowercase()));

            let tail = &rest[start..];
            let end = tail
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(tail.len());
            segments.push(Segment::Number(Digits::from_run(&tail[..end])));
            rest = &tail[end..];
        }

        Self { segments }
    }

    /// The segments of this key, alternating text and number.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Natural sort key of a path's base name.
///
/// Paths without a final component (`/`, `..`) fall back to the whole path
/// text.
#[must_use]
pub fn natural_key(path: &Path) -> NaturalKey {
    let name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
    NaturalKey::from_name(&name)
}

/// Compare two paths by the natural order of their base names.
#[must_use]
pub fn natural_cmp(a: &Path, b: &Path) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
