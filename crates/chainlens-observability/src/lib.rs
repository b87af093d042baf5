//! # chainlens-observability
//!
//! Structured logging for ChainLens binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! binary's job. [`init_tracing`] builds one from a [`LogConfig`], with
//! per-crate level overrides and either human-readable or JSON output
//! (compatible with ELK, Loki, CloudWatch).

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, LogConfig};
