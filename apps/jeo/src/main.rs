//! jeo - live score tracker for a trivia game night.
//!
//! Type one line per clue; totals are printed after every change.

use std::io;

use clap::{Parser, ValueEnum};
use jeo::console;
use jeo::{AppError, DailyDoubleRule, GameConfig, Session};
use tracing::info;

mod telemetry;

#[derive(Parser)]
#[command(name = "jeo")]
#[command(about = "Keep score for a trivia game from the terminal")]
struct Args {
    /// Comma-separated player names; each gets a one-letter identifier
    /// [env: JEO_PLAYERS]
    #[arg(short, long)]
    players: Option<String>,

    /// Daily Double scoring strategy [env: JEO_DD_RULE]
    #[arg(long, value_enum)]
    dd_rule: Option<DdRuleArg>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DdRuleArg {
    /// Clue face value
    #[value(name = "original-clue", alias = "1")]
    OriginalClue,
    /// Double clue face value
    #[value(name = "double-clue", alias = "2")]
    DoubleClue,
    /// Stake the player's whole score
    #[value(name = "true-daily-double", alias = "3")]
    TrueDailyDouble,
}

impl From<DdRuleArg> for DailyDoubleRule {
    fn from(arg: DdRuleArg) -> Self {
        match arg {
            DdRuleArg::OriginalClue => DailyDoubleRule::OriginalClue,
            DdRuleArg::DoubleClue => DailyDoubleRule::DoubleClue,
            DdRuleArg::TrueDailyDouble => DailyDoubleRule::TrueDailyDouble,
        }
    }
}

fn main() {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("jeo: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = GameConfig::resolve(args.players.as_deref(), args.dd_rule.map(Into::into))?;

    info!(players = %config.roster, dd_rule = ?config.dd_rule, "Starting game");
    println!("Players: {}", config.roster);
    println!("Daily Double scoring strategy: {}", config.dd_rule);

    let mut session = Session::new(config.roster, config.dd_rule);
    let stdin = io::stdin();
    console::run(stdin.lock(), io::stdout().lock(), &mut session)
}
