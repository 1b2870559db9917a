//! Domain layer: scoring rules, the ledger and the line interpreter.

pub mod daily_double;
pub mod entry;
pub mod ledger;
pub mod roster;
pub mod rules;
pub mod session;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_session_helpers;
#[cfg(test)]
mod tests_props_ledger;
#[cfg(test)]
mod tests_shared_session;

// Re-exports for ergonomics
pub use daily_double::stake;
pub use entry::{interpret, MetaCommand, Outcome};
pub use ledger::{Ledger, ScoreEvent};
pub use roster::{PlayerId, Roster};
pub use rules::{DailyDoubleRule, Round};
pub use session::{Session, SharedSession};
