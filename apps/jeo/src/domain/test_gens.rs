// Proptest generators for scoring lines.
// Generated lines are valid by construction for the round they target.

use proptest::prelude::*;

use crate::domain::Round;

/// A typed amount from the given round's board.
pub fn board_amount(round: Round) -> impl Strategy<Value = i64> {
    prop::sample::select(round.denominations().to_vec())
}

/// Non-empty subset of `a`, `b`, `c` as the players a line names.
pub fn addressed_players() -> impl Strategy<Value = String> {
    prop::sample::subsequence(vec!['a', 'b', 'c'], 1..=3).prop_map(|v| v.into_iter().collect())
}

/// A scoring line for `round` with optional wrong/Daily Double markers.
pub fn scoring_line(round: Round) -> impl Strategy<Value = String> {
    (
        board_amount(round),
        addressed_players(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(amount, players, wrong, dd)| {
            let mut line = format!("{amount} {players}");
            if dd {
                line.push('*');
            }
            if wrong {
                line.push('-');
            }
            line
        })
}

/// Mixed input: mostly scoring lines, some undos and junk.
pub fn any_line() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => scoring_line(Round::Regular),
        2 => Just("undo".to_string()),
        1 => Just("7 a".to_string()),
        1 => Just("# note".to_string()),
        1 => Just("x".to_string()),
    ]
}
