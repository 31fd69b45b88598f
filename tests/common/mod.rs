//! Shared test helpers for nombres integration tests.
//!
//! Every test runs the real binary inside its own temp directory.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Fresh empty working directory.
pub fn workdir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

/// Run nombres with the given args in the given directory.
///
/// `NOMBRES_LOG` and `NOMBRES_CONFIG` are cleared so the caller's
/// environment cannot leak into the run.
pub fn nombres_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nombres"))
        .args(args)
        .current_dir(dir)
        .env_remove("NOMBRES_LOG")
        .env_remove("NOMBRES_CONFIG")
        .output()
        .expect("failed to execute nombres")
}

/// Run nombres and assert it succeeds. Returns stdout as string.
pub fn nombres_ok(dir: &Path, args: &[&str]) -> String {
    let out = nombres_in(dir, args);
    let stderr = String::from_utf8_lossy(&out.stderr);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        out.status.success(),
        "nombres {} failed:\nstdout: {stdout}\nstderr: {stderr}",
        args.join(" "),
    );
    stdout.to_string()
}

/// Run nombres and assert it fails. Returns stderr as string.
pub fn nombres_fails(dir: &Path, args: &[&str]) -> String {
    let out = nombres_in(dir, args);
    assert!(
        !out.status.success(),
        "Expected nombres {} to fail, but it succeeded.\nstdout: {}",
        args.join(" "),
        String::from_utf8_lossy(&out.stdout),
    );
    String::from_utf8_lossy(&out.stderr).to_string()
}

/// Write a JSON value to `dir/name`.
pub fn write_json(dir: &Path, name: &str, value: &Value) {
    let text = serde_json::to_string_pretty(value).expect("serialize");
    std::fs::write(dir.join(name), text).expect("write json");
}

/// Read and parse `dir/name`.
pub fn read_json(dir: &Path, name: &str) -> Value {
    let text = std::fs::read_to_string(dir.join(name)).expect("read json");
    serde_json::from_str(&text).expect("parse json")
}

/// The `nombre` field of every record in a JSON array.
pub fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["nombre"].as_str().unwrap_or_default().to_owned())
        .collect()
}
