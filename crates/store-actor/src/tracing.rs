//! # Observability
//!
//! Tracing setup shared by every binary and test in the workspace.
//!
//! The subscriber uses a compact format with the module path hidden
//! (`with_target(false)`) and is configured through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run    # workflow-level logs
//! RUST_LOG=debug cargo run   # full request payloads
//! ```
//!
//! Store actors log every operation (Create, Get, Update, Delete, Find,
//! Action, Batch) with the entity type, id and outcome as structured
//! fields; client wrappers add request-level spans via
//! `#[tracing::instrument]`.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Defaults to `info` when `RUST_LOG` is unset. Safe to call more than
/// once (subsequent calls are no-ops), so tests can call it freely.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
