//! Diagnostic tracing for the binary.
//!
//! The library only emits `tracing` events; this module installs the
//! subscriber that prints them. Output goes to stderr so it never mixes with
//! `--print` results on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset or invalid.
///
/// # Example
/// ```bash
/// RUST_LOG=craneyard=debug craneyard puzzle.txt --print
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
    if installed.is_err() {
        // A subscriber was already set (e.g. by a test harness); keep it
        tracing::debug!("tracing subscriber already installed");
    }
}
