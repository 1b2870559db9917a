pub mod game;

pub use game::{GameConfig, DD_RULE_ENV, PLAYERS_ENV};
