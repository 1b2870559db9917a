//! Line interpreter: turns one typed line into a meta-command or a score event.
//!
//! Scoring lines are free-form. The amount is every digit in the line read
//! as one number, `-` marks a wrong answer, `*` marks a Daily Double, and
//! every roster identifier that appears anywhere in the line is scored.
//! `"8ab"`, `"8 a b"` and `"b8a"` all award 800 to both `a` and `b`.

use std::fmt;

use tracing::{debug, info, warn};

use super::daily_double::stake;
use super::ledger::ScoreEvent;
use super::rules::{Round, FACE_VALUE_SCALE};
use super::session::Session;
use crate::errors::domain::EntryError;

const COMMENT_PREFIX: char = '#';
const WRONG_MARKER: char = '-';
const DAILY_DOUBLE_MARKER: char = '*';

/// Reserved words. A line matching one exactly is never read as a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaCommand {
    Help,
    Undo,
    Scores,
    History,
    Regular,
    Double,
    Final,
    Reset,
    Settings,
}

impl MetaCommand {
    pub const ALL: [MetaCommand; 9] = [
        MetaCommand::Help,
        MetaCommand::Undo,
        MetaCommand::Scores,
        MetaCommand::History,
        MetaCommand::Regular,
        MetaCommand::Double,
        MetaCommand::Final,
        MetaCommand::Reset,
        MetaCommand::Settings,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            MetaCommand::Help => "help",
            MetaCommand::Undo => "undo",
            MetaCommand::Scores => "scores",
            MetaCommand::History => "history",
            MetaCommand::Regular => "regular",
            MetaCommand::Double => "double",
            MetaCommand::Final => "final",
            MetaCommand::Reset => "reset",
            MetaCommand::Settings => "settings",
        }
    }

    pub fn from_keyword(entry: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.keyword() == entry)
    }
}

impl fmt::Display for MetaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Result of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line or comment.
    Ignored,
    /// A reserved word. `Undo`, `Regular` and `Double` have already been
    /// applied to the session; the rest are for the caller to act on.
    Meta(MetaCommand),
    ScoreApplied(ScoreEvent),
    Rejected(EntryError),
}

/// Normalise a raw line: trimmed and lowercased.
pub fn normalize(raw_line: &str) -> String {
    raw_line.trim().to_lowercase()
}

/// Every ASCII digit in the line, in order, read as one integer.
pub fn parse_amount(entry: &str) -> Result<i64, EntryError> {
    let digits: String = entry.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(EntryError::ParseError);
    }
    digits.parse::<i64>().map_err(|_| EntryError::ParseError)
}

/// Interpret one raw line against the session.
///
/// A rejected line leaves the session exactly as it was.
pub fn interpret(raw_line: &str, session: &mut Session) -> Outcome {
    let entry = normalize(raw_line);

    if entry.is_empty() || entry.starts_with(COMMENT_PREFIX) {
        debug!(entry = %entry, "Ignoring line");
        return Outcome::Ignored;
    }

    if let Some(cmd) = MetaCommand::from_keyword(&entry) {
        apply_meta(cmd, session);
        return Outcome::Meta(cmd);
    }

    match score_entry(&entry, session) {
        Ok(event) => {
            debug!(entry = %entry, event = ?event, "Score applied");
            session.ledger_mut().append(event.clone(), entry);
            Outcome::ScoreApplied(event)
        }
        Err(err) => {
            warn!(entry = %entry, error = %err, "Rejected score entry");
            Outcome::Rejected(err)
        }
    }
}

fn apply_meta(cmd: MetaCommand, session: &mut Session) {
    match cmd {
        MetaCommand::Undo => {
            if let Some((_, line)) = session.ledger_mut().undo() {
                info!(line = %line, "Undid score entry");
            } else {
                debug!("Nothing to undo");
            }
        }
        MetaCommand::Regular => session.set_round(Round::Regular),
        MetaCommand::Double => session.set_round(Round::Double),
        // Final wagering is not modelled; the round stays where it is.
        MetaCommand::Final
        | MetaCommand::Reset
        | MetaCommand::Help
        | MetaCommand::Scores
        | MetaCommand::History
        | MetaCommand::Settings => {}
    }
}

/// Build the score event for a normalised scoring line without touching the
/// ledger.
pub fn score_entry(entry: &str, session: &Session) -> Result<ScoreEvent, EntryError> {
    let amount = parse_amount(entry)?;
    let round = session.round();

    // Gate on the typed amount even for a True Daily Double, whose stake
    // ignores it.
    if !round.is_valid_amount(amount) {
        return Err(EntryError::InvalidAmount { amount, round });
    }

    let is_wrong = entry.contains(WRONG_MARKER);
    let is_daily_double = entry.contains(DAILY_DOUBLE_MARKER);

    let players = session.roster().named_in(entry);
    if players.is_empty() {
        return Err(EntryError::UnknownPlayer);
    }

    // Each player's stake reads the ledger as it stood before this clue.
    let event = players
        .into_iter()
        .map(|player| {
            let mut value = amount * FACE_VALUE_SCALE;
            if is_daily_double {
                value = stake(session.dd_rule(), player, value, round, session.ledger());
            }
            if is_wrong {
                value = value.saturating_neg();
            }
            (player, value)
        })
        .collect();

    Ok(event)
}
