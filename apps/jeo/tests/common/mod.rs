#![allow(dead_code)]

use jeo::domain::{DailyDoubleRule, PlayerId, Roster, ScoreEvent, Session};

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    jeo_test_support::logging::init();
}

pub fn pid(c: char) -> PlayerId {
    PlayerId::new(c).expect("test identifier should be valid")
}

pub fn session(players: &[&str], rule: DailyDoubleRule) -> Session {
    Session::new(Roster::new(players).expect("roster should build"), rule)
}

pub fn event(awards: &[(char, i64)]) -> ScoreEvent {
    awards.iter().map(|&(c, amount)| (pid(c), amount)).collect()
}
