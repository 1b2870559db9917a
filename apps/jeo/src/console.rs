//! Line-oriented console front end.
//!
//! Reads one line at a time from any `BufRead`, feeds it to the session and
//! renders the result. End of input ends the game normally.

use std::io::{BufRead, Write};

use tracing::info;

use crate::domain::{MetaCommand, Outcome, Round, Session};
use crate::error::AppError;
use crate::errors::domain::EntryError;

const RULE: &str =
    "--------------------------------------------------------------------------------";

pub const HELP_TEXT: &str = "\
Scoring
  <amount> <players>   award <amount> x 100 to every player named, e.g. `10 a`
                       or `8ab` for a tie. Digits and letters may appear in
                       any order.
  -                    anywhere in the line: wrong answer, points are taken away
  *                    anywhere in the line: Daily Double
  # ...                comment, ignored

Commands
  undo       remove the last score entry
  scores     show every score entry
  history    show the lines that produced each score entry
  regular    switch to the regular round
  double     switch to the double round
  final      final round (not implemented yet)
  reset      set all scores back to 0 (asks first)
  settings   show players and Daily Double rule
  help       show this text
";

/// Drive `session` from `input` until it is exhausted.
pub fn run<R, W>(mut input: R, mut output: W, session: &mut Session) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    write_instructions(&mut output, session)?;

    loop {
        let prompt = if session.round() == Round::Double {
            ">> "
        } else {
            "> "
        };
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            info!("End of input");
            writeln!(output)?;
            return Ok(());
        };

        match session.interpret(&line) {
            Outcome::Ignored => {}
            Outcome::ScoreApplied(_) => write_totals(&mut output, session)?,
            Outcome::Rejected(err) => write_rejection(&mut output, session, &err)?,
            Outcome::Meta(cmd) => handle_meta(cmd, &mut input, &mut output, session)?,
        }
    }
}

fn handle_meta<R, W>(
    cmd: MetaCommand,
    input: &mut R,
    output: &mut W,
    session: &mut Session,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    match cmd {
        MetaCommand::Help => write!(output, "{HELP_TEXT}")?,
        MetaCommand::Undo => write_totals(output, session)?,
        MetaCommand::Scores => {
            writeln!(output, "{}", serde_json::to_string(session.ledger().events())?)?
        }
        MetaCommand::History => {
            for line in session.ledger().history() {
                writeln!(output, "{line}")?;
            }
        }
        MetaCommand::Regular | MetaCommand::Double => {}
        MetaCommand::Final => writeln!(output, "Sorry, that isn't implemented yet.")?,
        MetaCommand::Reset => {
            if confirm(
                input,
                output,
                "Are you sure you want to reset scores to 0?",
            )? {
                session.reset();
                write_totals(output, session)?;
            }
        }
        MetaCommand::Settings => {
            writeln!(output, "Players: {}", session.roster())?;
            writeln!(
                output,
                "Daily Double scoring strategy: {}",
                session.dd_rule()
            )?;
        }
    }
    Ok(())
}

fn write_instructions<W: Write>(output: &mut W, session: &Session) -> Result<(), AppError> {
    let first = session
        .roster()
        .players()
        .first()
        .map(|p| p.to_string())
        .unwrap_or_default();
    writeln!(output, "{RULE}")?;
    writeln!(
        output,
        "Instructions: Record a player's score for a clue with `<amount/100> <player>`"
    )?;
    writeln!(output, "E.g., to award $1000 to player {first}, enter:")?;
    writeln!(output)?;
    writeln!(output, "> 10 {first}")?;
    writeln!(output)?;
    writeln!(output, "Type `help` for more info.")?;
    writeln!(output, "{RULE}")?;
    Ok(())
}

/// One line per player, in roster order.
pub fn write_totals<W: Write>(output: &mut W, session: &Session) -> Result<(), AppError> {
    for (player, total) in session.totals() {
        writeln!(output, "{player:>12}: {}", format_amount(total))?;
    }
    Ok(())
}

pub fn format_amount(amount: i64) -> String {
    if amount < 0 {
        format!("-${}", amount.unsigned_abs())
    } else {
        format!("${amount}")
    }
}

fn write_rejection<W: Write>(
    output: &mut W,
    session: &Session,
    err: &EntryError,
) -> Result<(), AppError> {
    match err {
        EntryError::InvalidAmount { .. } => {
            let valid: Vec<String> = session
                .round()
                .denominations()
                .iter()
                .map(|a| a.to_string())
                .collect();
            writeln!(output, "That amount is invalid.")?;
            writeln!(output, "Valid amounts are: {}", valid.join(", "))?;
            writeln!(output, "Try again.")?;
        }
        EntryError::UnknownPlayer => writeln!(output, "Unknown player. Try again.")?,
        EntryError::ParseError => {
            writeln!(output, "Couldn't understand input...please try again.")?
        }
    }
    Ok(())
}

fn confirm<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool, AppError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt} [y/N]: ")?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
