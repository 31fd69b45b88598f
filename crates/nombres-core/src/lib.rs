//! Core logic for the nombres dataset tools.
//!
//! Everything here is pure and in-memory: no filesystem access, no process
//! state. The `nombres` binary crate handles globbing, file I/O and the CLI,
//! then hands parsed records to these modules.
//!
//! - [`natural`]: human-friendly ordering of file names (`a_2` before `a_10`).
//! - [`key`]: derives the normalized comparison key of a record.
//! - [`dedupe`]: the single-pass keep-first / keep-last dedup engine.
//! - [`report`]: plain-text audit of the duplicates a run removed.
//! - [`numerology`]: Pythagorean name numbers used by the generator.

pub mod dedupe;
pub mod key;
pub mod natural;
pub mod numerology;
pub mod report;

pub use dedupe::{DedupeConfig, DedupeOutcome, DuplicateEntry, KeepPolicy, dedupe};
pub use key::normalize_key;
pub use natural::{NaturalKey, natural_key};
