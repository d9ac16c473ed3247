//! Observability setup for Duochat.

pub mod tracing_setup;
