//! Normalized dedup keys.
//!
//! Two records are duplicates iff their normalized keys are equal. The key is
//! derived from one configurable field:
//!
//! 1. read the field (missing field or non-object record → `""`; strings are
//!    taken as-is; any other JSON value becomes its compact JSON text);
//! 2. unless accents are kept, NFKD-decompose and drop combining marks;
//! 3. unless case-sensitive, lowercase;
//! 4. trim surrounding whitespace.

use std::borrow::Cow;

use serde_json::Value;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use crate::dedupe::DedupeConfig;

/// Normalized key of `record` under `config`.
#[must_use]
pub fn normalize_key(record: &Value, config: &DedupeConfig) -> String {
    let raw = field_text(record, &config.key);
    normalize_text(&raw, config.case_sensitive, config.keep_accents)
}

/// Text of `field` in `record`, coerced to a string.
#[must_use]
pub fn field_text<'a>(record: &'a Value, field: &str) -> Cow<'a, str> {
    match record.get(field) {
        None => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Apply accent stripping, case folding and trimming to raw key text.
#[must_use]
pub fn normalize_text(raw: &str, case_sensitive: bool, keep_accents: bool) -> String {
    let mut key: Cow<'_, str> = Cow::Borrowed(raw);
    if !keep_accents {
        key = Cow::Owned(strip_accents(&key));
    }
    if !case_sensitive {
        key = Cow::Owned(key.to_lowercase());
    }
    key.trim().to_owned()
}

/// Decompose `s` and drop every character with a non-zero combining class.
#[must_use]
pub fn strip_accents(s: &str) -> String {
    s.nfkd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
