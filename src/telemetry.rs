//! Telemetry initialization.
//!
//! Controlled by `NOMBRES_LOG`:
//! - unset or empty → no subscriber (tracing disabled, zero overhead)
//! - `"json"` → JSON spans/events to stderr
//! - anything else → used as an `EnvFilter` directive (e.g. `debug`,
//!   `nombres=trace`) with human-readable output to stderr
//!
//! Telemetry never writes to stdout, so command output stays scriptable.
//! User-facing warnings are printed by the commands themselves and do not
//! depend on this module.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Environment variable that enables telemetry.
pub const LOG_ENV: &str = "NOMBRES_LOG";

/// Telemetry output selected from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TelemetryMode {
    /// No subscriber installed.
    Off,
    /// JSON events at `info` and above (overridable with `RUST_LOG`).
    Json,
    /// Human-readable events filtered by the given directive.
    Pretty(String),
}

impl TelemetryMode {
    /// Interpret a raw `NOMBRES_LOG` value.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Off,
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            Some(v) => Self::Pretty(v.to_owned()),
        }
    }
}

/// Initialize telemetry from `NOMBRES_LOG`.
pub fn init() {
    let value = std::env::var(LOG_ENV).ok();
    match TelemetryMode::from_value(value.as_deref()) {
        TelemetryMode::Off => {}
        TelemetryMode::Json => init_json(),
        TelemetryMode::Pretty(directive) => init_pretty(&directive),
    }
}

/// JSON spans/events to stderr via tracing-subscriber's JSON formatter.
fn init_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE),
        )
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: failed to init telemetry: {e}");
    }
}

/// Compact human-readable events to stderr.
fn init_pretty(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("warning: invalid {LOG_ENV} value '{directive}': {e}; using 'info'");
        EnvFilter::new("info")
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: failed to init telemetry: {e}");
    }
}
