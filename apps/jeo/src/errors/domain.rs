//! Domain-level error types.
//!
//! These are console- and config-agnostic. Every `EntryError` is recoverable
//! at the line level: the offending line is dropped and play continues.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::Round;

/// Why a scoring entry was refused. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// No usable integer could be pulled out of the line.
    ParseError,
    /// The amount is not on the current round's board.
    InvalidAmount { amount: i64, round: Round },
    /// No roster identifier occurs anywhere in the line.
    UnknownPlayer,
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EntryError::ParseError => write!(f, "could not read an amount"),
            EntryError::InvalidAmount { amount, round } => {
                write!(f, "amount {amount} is not valid in the {round} round")
            }
            EntryError::UnknownPlayer => write!(f, "unknown player"),
        }
    }
}

impl Error for EntryError {}

/// Problems building a roster at setup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    Empty,
    /// Identifier was not exactly one character.
    NotSingleChar(String),
    /// Character that carries scoring meaning (digit, `-`, `*`, `#`, space).
    Reserved(char),
    Duplicate(char),
    /// Every character of this player's name is already taken.
    NoFreeIdentifier(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            RosterError::Empty => write!(f, "roster has no players"),
            RosterError::NotSingleChar(s) => {
                write!(f, "player identifier must be one character: {s:?}")
            }
            RosterError::Reserved(c) => write!(f, "{c:?} cannot be used as a player identifier"),
            RosterError::Duplicate(c) => write!(f, "duplicate player identifier {c:?}"),
            RosterError::NoFreeIdentifier(name) => {
                write!(f, "no free identifier left for player {name:?}")
            }
        }
    }
}

impl Error for RosterError {}
