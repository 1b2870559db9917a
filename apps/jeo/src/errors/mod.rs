//! Error handling for the score tracker.

pub mod domain;

pub use domain::{EntryError, RosterError};
