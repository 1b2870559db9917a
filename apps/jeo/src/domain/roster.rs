use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::domain::RosterError;

/// Single lowercase character naming a player on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(char);

impl PlayerId {
    pub fn new(c: char) -> Result<Self, RosterError> {
        let lower = c.to_lowercase().next().unwrap_or(c);
        if is_reserved(lower) {
            return Err(RosterError::Reserved(lower));
        }
        Ok(Self(lower))
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// True when the identifier occurs anywhere in `line`.
    pub fn is_named_in(self, line: &str) -> bool {
        line.contains(self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.0.encode_utf8(&mut buf))
    }
}

impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Characters the entry parser gives meaning to.
fn is_reserved(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '*' | '#')
}

/// Ordered, duplicate-free set of players. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    /// Build from explicit one-character identifiers.
    pub fn new<I, S>(ids: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut players: Vec<PlayerId> = Vec::new();
        for raw in ids {
            let raw = raw.as_ref().trim();
            let mut chars = raw.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(RosterError::NotSingleChar(raw.to_string()));
            };
            let id = PlayerId::new(c)?;
            if players.contains(&id) {
                return Err(RosterError::Duplicate(id.as_char()));
            }
            players.push(id);
        }
        if players.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { players })
    }

    /// Derive identifiers from full player names.
    ///
    /// Each player gets the first character of their lowercased name that is
    /// not already taken by an earlier player, so "Alice" and "Alan" become
    /// `a` and `l`.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut players: Vec<PlayerId> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            let id = name
                .to_lowercase()
                .chars()
                .filter_map(|c| PlayerId::new(c).ok())
                .find(|id| !players.contains(id))
                .ok_or_else(|| RosterError::NoFreeIdentifier(name.to_string()))?;
            players.push(id);
        }
        if players.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { players })
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Every player whose identifier appears in `line`, in roster order.
    pub fn named_in(&self, line: &str) -> Vec<PlayerId> {
        self.players
            .iter()
            .copied()
            .filter(|p| p.is_named_in(line))
            .collect()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.players.iter().map(|p| p.to_string()).collect();
        f.write_str(&names.join(", "))
    }
}
