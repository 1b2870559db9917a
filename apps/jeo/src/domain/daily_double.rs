use super::ledger::Ledger;
use super::roster::PlayerId;
use super::rules::{DailyDoubleRule, Round};

/// Amount riding on a Daily Double for `player`, before any sign is applied.
///
/// `face_value` is the clue's scaled value. Under `TrueDailyDouble` the
/// player's current running total is staked, floored at the round minimum so
/// a player with a low (or negative) score can still play for the top clue.
pub fn stake(
    rule: DailyDoubleRule,
    player: PlayerId,
    face_value: i64,
    round: Round,
    ledger: &Ledger,
) -> i64 {
    match rule {
        DailyDoubleRule::OriginalClue => face_value,
        DailyDoubleRule::DoubleClue => face_value.saturating_mul(2),
        DailyDoubleRule::TrueDailyDouble => {
            ledger.running_total(player).max(round.minimum_stake())
        }
    }
}
