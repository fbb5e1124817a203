//! Interactive play over line-oriented input.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
    time::Instant,
};

use wordsearch_core::{Position, Word, WordError};
use wordsearch_game::{SelectionOutcome, Session};
use wordsearch_generator::Vocabulary;

use crate::render;

const HELP: &str = "\
Commands:
  R1 C1 R2 C2   select from row R1, column C1 to row R2, column C2
  show WORD     show where a found word lies
  words         list the words to find
  grid          print the grid
  new           start a new round
  help          print this help
  quit          leave the game
";

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select { start: Position, end: Position },
    Show(Word),
    Words,
    Grid,
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {input:?}; type `help` for a list of commands")]
    Unknown { input: String },
    #[display("{token:?} is not a coordinate")]
    Coordinate { token: String },
    #[display("a selection needs 4 coordinates, found {count}")]
    Arity { count: usize },
    #[display("invalid word: {source}")]
    Word { source: WordError },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();
        let Some(first) = tokens.first() else {
            return Err(ParseCommandError::Empty);
        };

        if first.starts_with(|c: char| c.is_ascii_digit()) {
            let coords = tokens
                .iter()
                .map(|token| {
                    token.parse::<usize>().map_err(|_| ParseCommandError::Coordinate {
                        token: (*token).to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let &[r1, c1, r2, c2] = coords.as_slice() else {
                return Err(ParseCommandError::Arity {
                    count: coords.len(),
                });
            };
            return Ok(Self::Select {
                start: Position::new(r1, c1),
                end: Position::new(r2, c2),
            });
        }

        let command = match (first.to_ascii_lowercase().as_str(), &tokens[1..]) {
            ("show" | "s", [word]) => {
                Self::Show(Word::new(word).map_err(|source| ParseCommandError::Word { source })?)
            }
            ("words" | "w", []) => Self::Words,
            ("grid" | "g", []) => Self::Grid,
            ("new" | "n", []) => Self::New,
            ("help" | "h" | "?", []) => Self::Help,
            ("quit" | "q" | "exit", []) => Self::Quit,
            _ => {
                return Err(ParseCommandError::Unknown {
                    input: s.trim().to_owned(),
                });
            }
        };
        Ok(command)
    }
}

/// Plays `session` until `input` is exhausted or the player quits.
///
/// The session must already have a round. `vocabulary` supplies new rounds.
pub fn play<R, W>(
    session: &mut Session,
    vocabulary: &Vocabulary,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    show_round(session, &mut output)?;
    let mut last_tick = Instant::now();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let now = Instant::now();
        let was_in_progress = session.status().is_in_progress();
        session.advance_clock(now - last_tick);
        last_tick = now;
        if was_in_progress && session.status().is_timed_out() {
            writeln!(output, "{}", render::status_line(session))?;
            write!(output, "{}", render::word_list(session))?;
            writeln!(output, "Type `new` to play again.")?;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        log::trace!("command: {command:?}");
        match command {
            Command::Select { start, end } => select(session, start, end, &mut output)?,
            Command::Show(word) => match session.found_word_placement(&word) {
                Some(placement) => writeln!(
                    output,
                    "{word} runs from {} to {} heading {}.",
                    placement.origin(),
                    placement.end(),
                    placement.direction()
                )?,
                None => writeln!(output, "{word} has not been found.")?,
            },
            Command::Words => write!(output, "{}", render::word_list(session))?,
            Command::Grid => write!(output, "{}", render::grid(session))?,
            Command::New => {
                session.restart(vocabulary);
                last_tick = Instant::now();
                show_round(session, &mut output)?;
            }
            Command::Help => write!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn select<W>(
    session: &mut Session,
    start: Position,
    end: Position,
    output: &mut W,
) -> io::Result<()>
where
    W: Write,
{
    let outcome = session.on_gesture(start, end);
    match &outcome.selection {
        SelectionOutcome::Matched(word) => {
            writeln!(output, "Found {word}!")?;
            write!(output, "{}", render::grid(session))?;
        }
        SelectionOutcome::AlreadyFound(word) => writeln!(output, "{word} was already found.")?,
        SelectionOutcome::NoMatch => writeln!(output, "No word there.")?,
        SelectionOutcome::Rejected(err) => writeln!(output, "Selection rejected: {err}.")?,
        SelectionOutcome::Inactive => writeln!(output, "{}", render::status_line(session))?,
    }
    if outcome.is_won && outcome.matched().is_some() {
        writeln!(output, "{}", render::status_line(session))?;
        writeln!(output, "Type `new` to play again.")?;
    }
    Ok(())
}

fn show_round<W>(session: &Session, output: &mut W) -> io::Result<()>
where
    W: Write,
{
    if let Some(seed) = session.round().and_then(|round| round.seed()) {
        writeln!(output, "Seed: {seed}")?;
    }
    write!(output, "{}", render::grid(session))?;
    write!(output, "{}", render::word_list(session))?;
    writeln!(output, "{}", render::status_line(session))?;
    writeln!(output, "Type `help` for commands.")
}
