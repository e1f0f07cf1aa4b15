//! # posture-observability
//!
//! Tracing subscriber setup and the span macros every other crate opens
//! around its operations.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, init_tracing_with_config};
