//! Tracing/logging subsystem.

pub mod setup;

pub use setup::init_tracing;
