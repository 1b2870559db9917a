#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod errors;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{interpret, DailyDoubleRule, Outcome, Round, Session, SharedSession};
pub use error::AppError;
pub use errors::{EntryError, RosterError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    jeo_test_support::logging::init();
}
