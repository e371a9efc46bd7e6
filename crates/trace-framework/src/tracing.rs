//! # Observability Setup
//!
//! Initializes structured logging for binaries and examples. Library code
//! never installs a subscriber; it only emits through the `tracing` macros.
//!
//! ```bash
//! # Compact trace lines (default)
//! RUST_LOG=info cargo run
//!
//! # Include instrumentation decisions and skipped components
//! RUST_LOG=debug cargo run
//! ```

/// Installs the global subscriber: env-filtered, compact, no module targets
/// (the trace lines carry their own labels).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
