//! nombres library crate.
//!
//! The primary interface is the `nombres` binary. This lib.rs exposes the
//! file-level pipeline (input expansion, record I/O, config, generator,
//! statistics) so tests can drive it without going through the CLI. The
//! pure in-memory logic lives in the `nombres-core` crate.

pub mod config;
pub mod expand;
pub mod generate;
pub mod records;
pub mod stats;
pub mod telemetry;
