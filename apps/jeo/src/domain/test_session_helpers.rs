use crate::domain::{DailyDoubleRule, PlayerId, Roster, ScoreEvent, Session};

pub fn pid(c: char) -> PlayerId {
    PlayerId::new(c).expect("test identifier should be valid")
}

/// Session with players `a` and `b`.
pub fn two_player_session(rule: DailyDoubleRule) -> Session {
    let roster = Roster::new(["a", "b"]).expect("roster should build");
    Session::new(roster, rule)
}

pub fn event(awards: &[(char, i64)]) -> ScoreEvent {
    awards.iter().map(|&(c, amount)| (pid(c), amount)).collect()
}

pub fn total(session: &Session, c: char) -> i64 {
    session.ledger().running_total(pid(c))
}
