//! Property-based tests for ledger and interpreter invariants.

use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude};
use crate::domain::{DailyDoubleRule, Outcome, Roster, Round, Session};

fn three_player_session(rule: DailyDoubleRule) -> Session {
    Session::new(Roster::new(["a", "b", "c"]).unwrap(), rule)
}

fn rule() -> impl Strategy<Value = DailyDoubleRule> {
    prop::sample::select(DailyDoubleRule::ALL.to_vec())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a scoring line followed by undo restores the ledger exactly.
    #[test]
    fn prop_undo_inverts_scoring(
        rule in rule(),
        prefix in prop::collection::vec(test_gens::scoring_line(Round::Regular), 0..8),
        line in test_gens::scoring_line(Round::Regular),
    ) {
        let mut session = three_player_session(rule);
        for l in &prefix {
            session.interpret(l);
        }
        let before = session.ledger().clone();

        let outcome = session.interpret(&line);
        prop_assert!(matches!(outcome, Outcome::ScoreApplied(_)), "line {:?}", line);
        prop_assert_eq!(session.ledger().len(), before.len() + 1);

        session.interpret("undo");
        prop_assert_eq!(session.ledger(), &before);
    }

    /// Property: undo on an empty ledger never changes it, however often.
    #[test]
    fn prop_undo_on_empty_is_idempotent(rule in rule(), times in 1usize..5) {
        let mut session = three_player_session(rule);
        for _ in 0..times {
            session.interpret("undo");
        }
        prop_assert!(session.ledger().is_empty());
        prop_assert!(session.ledger().history().is_empty());
    }

    /// Property: totals always equal a fresh sum over the recorded events,
    /// and events stay in lockstep with history.
    #[test]
    fn prop_totals_match_events(
        rule in rule(),
        lines in prop::collection::vec(test_gens::any_line(), 0..30),
    ) {
        let mut session = three_player_session(rule);
        for line in &lines {
            session.interpret(line);

            prop_assert_eq!(session.ledger().len(), session.ledger().history().len());
            for (player, total) in session.totals() {
                let expected: i64 = session
                    .ledger()
                    .events()
                    .iter()
                    .flat_map(|ev| ev.awards().iter())
                    .filter(|(p, _)| *p == player)
                    .map(|(_, amount)| *amount)
                    .sum();
                prop_assert_eq!(total, expected);
            }
        }
    }

    /// Property: recorded amounts are never zero and carry the line's sign.
    #[test]
    fn prop_amounts_are_nonzero_and_signed(
        rule in rule(),
        line in test_gens::scoring_line(Round::Double),
    ) {
        let mut session = three_player_session(rule);
        session.interpret("double");
        let Outcome::ScoreApplied(event) = session.interpret(&line) else {
            return Err(TestCaseError::fail(format!("not applied: {line}")));
        };
        let wrong = line.contains('-');
        for (_, amount) in event.awards() {
            prop_assert!(*amount != 0);
            prop_assert_eq!(*amount < 0, wrong);
        }
    }
}
