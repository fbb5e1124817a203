//! Text rendering of a session.

use std::{
    collections::HashSet,
    fmt::{self, Display},
    time::Duration,
};

use wordsearch_core::Position;
use wordsearch_game::{Session, SessionStatus};

/// Renders the grid with row and column indices.
///
/// Letters of found words are shown in lowercase.
#[must_use]
pub fn grid(session: &Session) -> String {
    GridView(session).to_string()
}

/// Renders the target words with their found marks.
#[must_use]
pub fn word_list(session: &Session) -> String {
    WordListView(session).to_string()
}

struct GridView<'a>(&'a Session);

impl Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let Some(round) = session.round() else {
            return Ok(());
        };
        let grid = round.grid();
        let size = grid.size();
        let found_cells: HashSet<Position> = round
            .found_words()
            .iter()
            .filter_map(|word| session.found_word_placement(word))
            .flat_map(|placement| placement.cells().collect::<Vec<_>>())
            .collect();
        let width = (size - 1).to_string().len();

        write!(f, "{:width$} ", "")?;
        for col in 0..size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;
        for row in 0..size {
            write!(f, "{row:>width$} ")?;
            for col in 0..size {
                let pos = Position::new(row, col);
                let letter = grid.letter(pos);
                let letter = if found_cells.contains(&pos) {
                    letter.to_ascii_lowercase()
                } else {
                    letter
                };
                write!(f, " {letter:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct WordListView<'a>(&'a Session);

impl Display for WordListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(round) = self.0.round() else {
            return Ok(());
        };
        for word in round.words() {
            let mark = if round.is_found(word) { 'x' } else { ' ' };
            writeln!(f, "[{mark}] {word}")?;
        }
        writeln!(
            f,
            "{}/{} found",
            round.found_words().len(),
            round.words().len()
        )
    }
}

/// Renders a one-line status summary.
#[must_use]
pub fn status_line(session: &Session) -> String {
    let remaining = session
        .remaining_time()
        .map(|left| format!(", {} left", clock(left)))
        .unwrap_or_default();
    match session.status() {
        SessionStatus::NotStarted => "No round in progress.".to_owned(),
        SessionStatus::InProgress => format!("Round in progress{remaining}."),
        SessionStatus::Won => format!("All words found in {}!", clock(session.elapsed())),
        SessionStatus::TimedOut => "Time is up!".to_owned(),
    }
}

fn clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
