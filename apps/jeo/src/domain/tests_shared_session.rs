use std::thread;

use crate::domain::test_session_helpers::{pid, two_player_session};
use crate::domain::{DailyDoubleRule, Outcome, SharedSession};

#[test]
fn concurrent_lines_each_apply_once() {
    let shared = SharedSession::new(two_player_session(DailyDoubleRule::OriginalClue));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    assert!(matches!(
                        shared.interpret("2 ab"),
                        Outcome::ScoreApplied(_)
                    ));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("scoring thread panicked");
    }

    assert_eq!(shared.totals(), vec![(pid('a'), 20_000), (pid('b'), 20_000)]);
    assert_eq!(shared.with(|s| s.ledger().history().len()), 100);
}

#[test]
fn true_daily_double_reads_a_consistent_ledger_under_contention() {
    let shared = SharedSession::new(two_player_session(DailyDoubleRule::TrueDailyDouble));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    shared.interpret("2 a*");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("scoring thread panicked");
    }

    // Every stake saw the running total as of the previous event: each one
    // doubles the score once it passes the 1000 floor.
    let events = shared.with(|s| s.ledger().events().to_vec());
    let mut running = 0;
    for ev in &events {
        let amount = ev.amount_for(pid('a')).unwrap_or_default();
        assert_eq!(amount, running.max(1000));
        running += amount;
    }
    assert_eq!(events.len(), 40);
}

#[test]
fn shared_reset_clears_scores() {
    let shared = SharedSession::new(two_player_session(DailyDoubleRule::OriginalClue));
    shared.interpret("10 a");
    shared.reset();
    assert_eq!(shared.totals(), vec![(pid('a'), 0), (pid('b'), 0)]);
}
