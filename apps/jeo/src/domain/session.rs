//! Session context: everything the interpreter needs to score a line.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use super::entry::{interpret, Outcome};
use super::ledger::Ledger;
use super::roster::{PlayerId, Roster};
use super::rules::{DailyDoubleRule, Round};

/// One game in progress.
///
/// Roster and Daily Double rule are fixed when the session is created; the
/// round changes through meta-commands and the ledger through scoring lines.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    dd_rule: DailyDoubleRule,
    round: Round,
    ledger: Ledger,
}

impl Session {
    pub fn new(roster: Roster, dd_rule: DailyDoubleRule) -> Self {
        Self {
            roster,
            dd_rule,
            round: Round::default(),
            ledger: Ledger::new(),
        }
    }

    /// Interpret one raw line. See [`interpret`].
    pub fn interpret(&mut self, raw_line: &str) -> Outcome {
        interpret(raw_line, self)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn dd_rule(&self) -> DailyDoubleRule {
        self.dd_rule
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn set_round(&mut self, round: Round) {
        if self.round != round {
            info!(from = %self.round, to = %round, "Round changed");
        }
        self.round = round;
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Clear every score. Callers confirm with the players first.
    pub fn reset(&mut self) {
        info!(events = self.ledger.len(), "Resetting scores");
        self.ledger.reset();
    }

    /// Current total of every player, in roster order.
    pub fn totals(&self) -> Vec<(PlayerId, i64)> {
        self.ledger.summed_totals(&self.roster)
    }
}

/// A session that several input sources can drive at once.
///
/// Every call holds the lock for its whole duration, so a scoring line is
/// computed and appended without another caller's undo or reset landing in
/// between.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn interpret(&self, raw_line: &str) -> Outcome {
        self.inner.lock().interpret(raw_line)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn totals(&self) -> Vec<(PlayerId, i64)> {
        self.inner.lock().totals()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
