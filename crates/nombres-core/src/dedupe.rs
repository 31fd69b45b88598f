//! Keep-first / keep-last deduplication of a concatenated record sequence.
//!
//! The engine makes one left-to-right pass over the records, keeping a map
//! from normalized key to the index of the record currently winning that key:
//!
//! - first sighting of a key → that index wins, nothing is logged;
//! - later sighting → a [`DuplicateEntry`] `(key, winner, index)` is logged,
//!   and under [`KeepPolicy::Last`] the winner moves to `index`.
//!
//! Survivors are exactly the final winner indices, emitted in ascending
//! original index. The output is therefore a stable sub-sequence of the
//! input: never regrouped by key, never reordered by when a winner was
//! chosen. Records are moved, not cloned, and never modified.
//!
//! # Invariants
//!
//! - every output record has a distinct normalized key;
//! - indices in [`DuplicateEntry`] refer to the pre-dedup sequence;
//! - re-running on the output removes nothing.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::key::normalize_key;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which record survives when two records share a normalized key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepPolicy {
    /// Keep the earliest record in concatenation order.
    #[default]
    First,
    /// Keep the latest record in concatenation order.
    Last,
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

/// A `--keep` value other than `first` or `last`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid keep policy '{0}': expected 'first' or 'last'")]
pub struct ParseKeepPolicyError(pub String);

impl FromStr for KeepPolicy {
    type Err = ParseKeepPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(ParseKeepPolicyError(s.to_owned())),
        }
    }
}

/// Effective dedup settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DedupeConfig {
    /// Record field the key is derived from.
    pub key: String,
    /// Conflict resolution policy.
    pub keep: KeepPolicy,
    /// Compare keys without lowercasing.
    pub case_sensitive: bool,
    /// Compare keys without stripping diacritics.
    pub keep_accents: bool,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            keep: KeepPolicy::First,
            case_sensitive: false,
            keep_accents: false,
        }
    }
}

/// Field used for dedup when none is configured.
#[must_use]
pub fn default_key() -> String {
    "nombre".to_owned()
}

impl fmt::Display for DedupeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key={}, keep={}, case_sensitive={}, keep_accents={}",
            self.key, self.keep, self.case_sensitive, self.keep_accents
        )
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One detected collision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// The shared normalized key.
    pub key: String,
    /// Index of the record winning the key when the collision was seen.
    pub kept: usize,
    /// Index of the colliding record.
    pub duplicate: usize,
}

/// Output of [`dedupe`].
#[derive(Clone, Debug, PartialEq)]
pub struct DedupeOutcome {
    /// Surviving records, in original relative order.
    pub records: Vec<Value>,
    /// Every collision, in detection order.
    pub duplicates: Vec<DuplicateEntry>,
    /// Number of records before dedup.
    pub total: usize,
}

impl DedupeOutcome {
    /// Records dropped by dedup.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.total - self.records.len()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Winner index per key plus the collision log, without touching records.
///
/// Returns `(keep_mask, duplicates)` where `keep_mask[i]` is true iff record
/// `i` survives.
#[must_use]
pub fn plan(records: &[Value], config: &DedupeConfig) -> (Vec<bool>, Vec<DuplicateEntry>) {
    let mut winners: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut duplicates = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match winners.entry(normalize_key(record, config)) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(mut slot) => {
                duplicates.push(DuplicateEntry {
                    key: slot.key().clone(),
                    kept: *slot.get(),
                    duplicate: index,
                });
                if config.keep == KeepPolicy::Last {
                    slot.insert(index);
                }
            }
        }
    }

    let mut keep_mask = vec![false; records.len()];
    for &index in winners.values() {
        keep_mask[index] = true;
    }
    (keep_mask, duplicates)
}

/// Deduplicate `records` under `config`.
#[must_use]
#[tracing::instrument(skip_all, fields(records = records.len(), key = %config.key, keep = %config.keep))]
pub fn dedupe(records: Vec<Value>, config: &DedupeConfig) -> DedupeOutcome {
    let total = records.len();
    let (keep_mask, duplicates) = plan(&records, config);

    let records: Vec<Value> = records
        .into_iter()
        .zip(keep_mask)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect();

    tracing::debug!(
        total,
        kept = records.len(),
        collisions = duplicates.len(),
        %config,
        "dedupe complete"
    );

    DedupeOutcome {
        records,
        duplicates,
        total,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn names(values: &[Value]) -> Vec<&str> {
        values
            .iter()
            .map(|v| v["nombre"].as_str().unwrap_or_default())
            .collect()
    }

    fn recs(names: &[&str]) -> Vec<Value> {
        names.iter().map(|n| json!({ "nombre": n })).collect()
    }

    fn last() -> DedupeConfig {
        DedupeConfig {
            keep: KeepPolicy::Last,
            ..DedupeConfig::default()
        }
    }

    #[test]
    fn two_batch_scenario() {
        let mut input = recs(&["Ana", "Luis"]);
        input.extend(recs(&["ana", "Marco"]));
        let out = dedupe(input, &DedupeConfig::default());
        assert_eq!(names(&out.records), ["Ana", "Luis", "Marco"]);
        assert_eq!(out.removed(), 1);
        assert_eq!(
            out.duplicates,
            [DuplicateEntry {
                key: "ana".to_owned(),
                kept: 0,
                duplicate: 2,
            }]
        );
    }

    #[test]
    fn keep_last_picks_later_record_but_keeps_its_position() {
        let out = dedupe(recs(&["Ana", "Luis", "ANA", "Marco"]), &last());
        assert_eq!(names(&out.records), ["Luis", "ANA", "Marco"]);
        assert_eq!(out.removed(), 1);
    }

    #[test]
    fn keep_last_logs_moving_winner() {
        let out = dedupe(recs(&["a", "A", "á"]), &last());
        assert_eq!(names(&out.records), ["á"]);
        let pairs: Vec<_> = out.duplicates.iter().map(|d| (d.kept, d.duplicate)).collect();
        assert_eq!(pairs, [(0, 1), (1, 2)]);
    }

    #[test]
    fn keep_first_logs_fixed_winner() {
        let out = dedupe(recs(&["a", "A", "á"]), &DedupeConfig::default());
        assert_eq!(names(&out.records), ["a"]);
        let pairs: Vec<_> = out.duplicates.iter().map(|d| (d.kept, d.duplicate)).collect();
        assert_eq!(pairs, [(0, 1), (0, 2)]);
    }

    #[test]
    fn strict_settings_keep_case_and_accent_variants() {
        let cfg = DedupeConfig {
            case_sensitive: true,
            keep_accents: true,
            ..DedupeConfig::default()
        };
        let out = dedupe(recs(&["Ana", "ana", "Aná"]), &cfg);
        assert_eq!(out.records.len(), 3);
        assert!(out.duplicates.is_empty());
    }

    #[test]
    fn records_without_key_collide_on_empty_key() {
        let input = vec![json!({ "x": 1 }), json!({ "nombre": "Ana" }), json!({ "x": 2 })];
        let out = dedupe(input, &DedupeConfig::default());
        assert_eq!(out.records, [json!({ "x": 1 }), json!({ "nombre": "Ana" })]);
    }

    #[test]
    fn empty_input() {
        let out = dedupe(Vec::new(), &DedupeConfig::default());
        assert!(out.records.is_empty());
        assert_eq!(out.removed(), 0);
    }

    #[test]
    fn keep_policy_parses_and_displays() {
        assert_eq!("first".parse::<KeepPolicy>(), Ok(KeepPolicy::First));
        assert_eq!("LAST".parse::<KeepPolicy>(), Ok(KeepPolicy::Last));
        assert!("middle".parse::<KeepPolicy>().is_err());
        assert_eq!(KeepPolicy::Last.to_string(), "last");
    }

    #[test]
    fn config_display_names_every_setting() {
        assert_eq!(
            DedupeConfig::default().to_string(),
            "key=nombre, keep=first, case_sensitive=false, keep_accents=false"
        );
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn arb_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec!["Ana", "ana", "Aná", "Luis", "LUIS", "Marco", " Eva", "Eva "]),
            0..40,
        )
        .prop_map(|v| v.into_iter().map(str::to_owned).collect())
    }

    fn arb_config() -> impl Strategy<Value = DedupeConfig> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(last, cs, ka)| DedupeConfig {
            keep: if last { KeepPolicy::Last } else { KeepPolicy::First },
            case_sensitive: cs,
            keep_accents: ka,
            ..DedupeConfig::default()
        })
    }

    fn tagged(names: &[String]) -> Vec<Value> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| json!({ "nombre": n, "pos": i }))
            .collect()
    }

    fn positions(values: &[Value]) -> Vec<u64> {
        values.iter().filter_map(|v| v["pos"].as_u64()).collect()
    }

    proptest! {
        #[test]
        fn output_keys_are_unique(input in arb_names(), cfg in arb_config()) {
            let out = dedupe(tagged(&input), &cfg);
            let keys: HashSet<_> = out.records.iter().map(|r| normalize_key(r, &cfg)).collect();
            prop_assert_eq!(keys.len(), out.records.len());
            prop_assert_eq!(out.removed(), out.duplicates.len());
        }

        #[test]
        fn output_preserves_input_order(input in arb_names(), cfg in arb_config()) {
            let out = dedupe(tagged(&input), &cfg);
            let pos = positions(&out.records);
            prop_assert!(pos.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn rerun_is_idempotent(input in arb_names(), cfg in arb_config()) {
            let first = dedupe(tagged(&input), &cfg);
            let second = dedupe(first.records.clone(), &cfg);
            prop_assert_eq!(second.removed(), 0);
            prop_assert_eq!(second.records, first.records);
        }

        #[test]
        fn policies_pick_first_or_last_occurrence(input in arb_names(), cs in any::<bool>(), ka in any::<bool>()) {
            let first_cfg = DedupeConfig { case_sensitive: cs, keep_accents: ka, ..DedupeConfig::default() };
            let last_cfg = DedupeConfig { keep: KeepPolicy::Last, ..first_cfg.clone() };
            let records = tagged(&input);

            let mut first_seen: HashMap<String, u64> = HashMap::new();
            let mut last_seen: HashMap<String, u64> = HashMap::new();
            for (i, r) in records.iter().enumerate() {
                let k = normalize_key(r, &first_cfg);
                first_seen.entry(k.clone()).or_insert(i as u64);
                last_seen.insert(k, i as u64);
            }
            let mut expect_first: Vec<u64> = first_seen.into_values().collect();
            let mut expect_last: Vec<u64> = last_seen.into_values().collect();
            expect_first.sort_unstable();
            expect_last.sort_unstable();

            prop_assert_eq!(positions(&dedupe(records.clone(), &first_cfg).records), expect_first);
            prop_assert_eq!(positions(&dedupe(records, &last_cfg).records), expect_last);
        }

        #[test]
        fn deterministic_across_runs(input in arb_names(), cfg in arb_config()) {
            let a = dedupe(tagged(&input), &cfg);
            let b = dedupe(tagged(&input), &cfg);
            prop_assert_eq!(a, b);
        }
    }
}
