//! Append-only record of score events with undo.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::roster::{PlayerId, Roster};

/// Outcome of one clue: a signed amount for each player it scored.
///
/// Entries keep roster order. A tie yields one entry per player because a
/// Daily Double stake can differ between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreEvent {
    awards: Vec<(PlayerId, i64)>,
}

impl ScoreEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `amount` for `player`. Zero amounts are not recorded.
    pub fn award(&mut self, player: PlayerId, amount: i64) {
        if amount == 0 {
            return;
        }
        match self.awards.iter_mut().find(|(p, _)| *p == player) {
            Some((_, existing)) => *existing = amount,
            None => self.awards.push((player, amount)),
        }
    }

    pub fn amount_for(&self, player: PlayerId) -> Option<i64> {
        self.awards
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, amount)| *amount)
    }

    pub fn awards(&self) -> &[(PlayerId, i64)] {
        &self.awards
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }
}

impl FromIterator<(PlayerId, i64)> for ScoreEvent {
    fn from_iter<T: IntoIterator<Item = (PlayerId, i64)>>(iter: T) -> Self {
        let mut event = ScoreEvent::new();
        for (player, amount) in iter {
            event.award(player, amount);
        }
        event
    }
}

// Serialized as a JSON object: {"a": 800, "b": 800}
impl Serialize for ScoreEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.awards.len()))?;
        for (player, amount) in &self.awards {
            map.serialize_entry(player, amount)?;
        }
        map.end()
    }
}

/// Score events in the order they were entered, with the line that produced
/// each one kept alongside.
///
/// `events` and `history` always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    events: Vec<ScoreEvent>,
    history: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: ScoreEvent, line: impl Into<String>) {
        self.events.push(event);
        self.history.push(line.into());
    }

    /// Drop the most recent event. Returns what was removed; `None` when the
    /// ledger was already empty.
    pub fn undo(&mut self) -> Option<(ScoreEvent, String)> {
        let event = self.events.pop()?;
        let line = self.history.pop().unwrap_or_default();
        Some((event, line))
    }

    pub fn reset(&mut self) {
        self.events.clear();
        self.history.clear();
    }

    /// Sum of every amount recorded for `player`. Always a fresh scan.
    ///
    /// Saturates at the `i64` bounds; a long run of True Daily Doubles doubles
    /// the score each time.
    pub fn running_total(&self, player: PlayerId) -> i64 {
        self.events
            .iter()
            .filter_map(|event| event.amount_for(player))
            .fold(0i64, i64::saturating_add)
    }

    /// Running total of every roster player, in roster order.
    pub fn summed_totals(&self, roster: &Roster) -> Vec<(PlayerId, i64)> {
        roster
            .players()
            .iter()
            .map(|&player| (player, self.running_total(player)))
            .collect()
    }

    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
