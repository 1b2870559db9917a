use std::fmt;
use std::str::FromStr;

/// Clue values (in hundreds) on the regular board.
pub const REGULAR_AMOUNTS: [i64; 5] = [2, 4, 6, 8, 10];
/// Clue values (in hundreds) on the double board: the regular board doubled.
pub const DOUBLE_AMOUNTS: [i64; 5] = [4, 8, 12, 16, 20];

/// Multiplier from the typed amount to the clue's face value.
pub const FACE_VALUE_SCALE: i64 = 100;

/// Game round. Governs which amounts are valid and the Daily Double floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Round {
    #[default]
    Regular,
    Double,
    /// Recognised but carries no wager rules of its own; scores like `Regular`.
    FinalRound,
}

impl Round {
    /// Amounts (pre-scaling) accepted as scoring entries in this round.
    pub fn denominations(self) -> &'static [i64] {
        match self {
            Round::Double => &DOUBLE_AMOUNTS,
            Round::Regular | Round::FinalRound => &REGULAR_AMOUNTS,
        }
    }

    pub fn is_valid_amount(self, amount: i64) -> bool {
        self.denominations().contains(&amount.abs())
    }

    /// Highest clue face value on this round's board.
    ///
    /// A True Daily Double lets a player stake at least this much even when
    /// their score is lower.
    pub fn minimum_stake(self) -> i64 {
        let top = self.denominations().iter().copied().max().unwrap_or(0);
        top * FACE_VALUE_SCALE
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Round::Regular => "regular",
            Round::Double => "double",
            Round::FinalRound => "final",
        };
        f.write_str(s)
    }
}

/// How a Daily Double clue is scored. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyDoubleRule {
    /// Award the clue's face value.
    OriginalClue,
    /// Award twice the clue's face value.
    DoubleClue,
    /// Stake the player's whole score, floored at the round's top clue value.
    TrueDailyDouble,
}

impl DailyDoubleRule {
    pub const ALL: [DailyDoubleRule; 3] = [
        DailyDoubleRule::OriginalClue,
        DailyDoubleRule::DoubleClue,
        DailyDoubleRule::TrueDailyDouble,
    ];

    /// Menu number used when the rule is picked by number (1-based).
    pub fn code(self) -> u8 {
        match self {
            DailyDoubleRule::OriginalClue => 1,
            DailyDoubleRule::DoubleClue => 2,
            DailyDoubleRule::TrueDailyDouble => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.code() == code)
    }

    pub fn description(self) -> &'static str {
        match self {
            DailyDoubleRule::OriginalClue => "Clue face value",
            DailyDoubleRule::DoubleClue => "Double clue face value",
            DailyDoubleRule::TrueDailyDouble => "True Daily Double",
        }
    }
}

impl fmt::Display for DailyDoubleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for DailyDoubleRule {
    type Err = String;

    /// Accepts the menu number or the kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code)
                .ok_or_else(|| format!("unknown Daily Double rule number: {code}"));
        }
        match s.as_str() {
            "original-clue" | "original" => Ok(DailyDoubleRule::OriginalClue),
            "double-clue" | "double" => Ok(DailyDoubleRule::DoubleClue),
            "true-daily-double" | "true" => Ok(DailyDoubleRule::TrueDailyDouble),
            _ => Err(format!("unknown Daily Double rule: {s}")),
        }
    }
}
