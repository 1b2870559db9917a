//! Shared helpers for the jeo integration tests.

pub mod logging;
