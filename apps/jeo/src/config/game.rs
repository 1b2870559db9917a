use std::env;

use crate::domain::{DailyDoubleRule, Roster};
use crate::error::AppError;

/// Comma-separated player names, used when `--players` is not given.
pub const PLAYERS_ENV: &str = "JEO_PLAYERS";
/// Daily Double rule (number or name), used when `--dd-rule` is not given.
pub const DD_RULE_ENV: &str = "JEO_DD_RULE";

/// Session settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub roster: Roster,
    pub dd_rule: DailyDoubleRule,
}

impl GameConfig {
    /// Resolve settings: explicit values win, then the environment, then the
    /// default rule. Players have no default.
    pub fn resolve(
        players: Option<&str>,
        dd_rule: Option<DailyDoubleRule>,
    ) -> Result<Self, AppError> {
        let players = match players {
            Some(p) => p.to_string(),
            None => must_var(PLAYERS_ENV)?,
        };
        match dd_rule {
            Some(rule) => Ok(Self {
                roster: parse_players(&players)?,
                dd_rule: rule,
            }),
            None => Self::from_values(&players, env::var(DD_RULE_ENV).ok().as_deref()),
        }
    }

    /// Build from raw values without consulting the environment.
    pub fn from_values(players: &str, dd_rule: Option<&str>) -> Result<Self, AppError> {
        let roster = parse_players(players)?;
        let dd_rule = match dd_rule {
            Some(raw) => raw.parse::<DailyDoubleRule>().map_err(AppError::config)?,
            None => DailyDoubleRule::TrueDailyDouble,
        };
        Ok(Self { roster, dd_rule })
    }
}

/// Split a comma-separated list of player names into a roster.
pub fn parse_players(raw: &str) -> Result<Roster, AppError> {
    let names: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    Ok(Roster::from_names(names)?)
}

fn must_var(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| {
        AppError::config(format!(
            "no players given: pass --players or set {key}"
        ))
    })
}
