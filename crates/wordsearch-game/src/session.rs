use std::{iter, time::Duration};

use wordsearch_core::{LetterGrid, Placement, Position, SelectionPath, Word};
use wordsearch_generator::{PuzzleSeed, Vocabulary};

use crate::{GestureOutcome, Round, SelectionOutcome, SessionOptions, SessionStatus};

/// A word-search game session.
///
/// Owns the current [`Round`] and drives it through
/// `NotStarted → InProgress → Won` (or `TimedOut` when a countdown is configured).
/// Gestures are resolved into straight [`SelectionPath`]s and matched against the
/// round's target words. A gesture never changes the grid.
///
/// # Example
///
/// ```
/// use wordsearch_core::{Direction, DraftGrid, Position, Word};
/// use wordsearch_game::{Session, SessionOptions};
///
/// let cat = Word::new("cat")?;
/// let mut draft = DraftGrid::new(6);
/// draft.place(&cat, Position::new(1, 1), Direction::SouthEast).unwrap();
/// let grid = draft.fill_with(|_| b'X');
///
/// let mut session = Session::from_grid(grid, &[cat.clone()], SessionOptions::default());
/// let outcome = session.on_gesture(Position::new(1, 1), Position::new(3, 3));
///
/// assert_eq!(outcome.matched(), Some(&cat));
/// assert!(outcome.is_won);
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    options: SessionOptions,
    status: SessionStatus,
    round: Option<Round>,
    elapsed: Duration,
    anchor: Option<Position>,
    selection: SelectionPath,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    /// Creates a session that has not started a round yet.
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            status: SessionStatus::NotStarted,
            round: None,
            elapsed: Duration::ZERO,
            anchor: None,
            selection: SelectionPath::default(),
        }
    }

    /// Creates an in-progress session over an existing grid.
    ///
    /// Duplicate words are ignored. Words that cannot be read anywhere in `grid`
    /// along the session's directions are dropped from the round and reported by
    /// [`Round::dropped_words`].
    #[must_use]
    pub fn from_grid(grid: LetterGrid, words: &[Word], options: SessionOptions) -> Self {
        let directions = options.directions();
        let mut targets: Vec<Word> = Vec::with_capacity(words.len());
        let mut dropped = Vec::new();
        for word in words {
            if targets.contains(word) || dropped.contains(word) {
                continue;
            }
            if grid.locate(word, directions).is_some() {
                targets.push(word.clone());
            } else {
                log::warn!("dropping {word}: not present in the grid");
                dropped.push(word.clone());
            }
        }

        let mut session = Self::new(options);
        session.begin(Round::from_grid(grid, targets, dropped));
        session
    }

    /// Returns the session options.
    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns `true` once every target word of the current round is found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    /// Returns the current round, or `None` before the first round starts.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Starts a new round with a fresh random seed.
    ///
    /// Any previous round is discarded, whatever its state.
    pub fn start_round(&mut self, vocabulary: &Vocabulary) -> &Round {
        self.start_round_with_seed(vocabulary, PuzzleSeed::random())
    }

    /// Starts the round that `seed` describes.
    ///
    /// The seed drives both the word set drawn from `vocabulary` and the grid.
    pub fn start_round_with_seed(&mut self, vocabulary: &Vocabulary, seed: PuzzleSeed) -> &Round {
        let puzzle = self.options.generator.generate_round(vocabulary, seed);
        log::info!(
            "starting round {seed}: {} words on a {size}x{size} grid",
            puzzle.words.len(),
            size = puzzle.grid.size()
        );
        if puzzle.words.is_empty() {
            log::warn!("round {seed} has no target words and cannot be won");
        }
        self.begin(Round::from_puzzle(puzzle))
    }

    /// Discards the current round and returns to [`SessionStatus::NotStarted`].
    pub fn reset(&mut self) {
        self.status = SessionStatus::NotStarted;
        self.round = None;
        self.elapsed = Duration::ZERO;
        self.clear_gesture();
    }

    /// Discards the current round and immediately starts a new one.
    pub fn restart(&mut self, vocabulary: &Vocabulary) -> &Round {
        self.reset();
        self.start_round(vocabulary)
    }

    fn begin(&mut self, round: Round) -> &Round {
        self.elapsed = Duration::ZERO;
        self.clear_gesture();
        self.status = SessionStatus::InProgress;
        self.round.insert(round)
    }

    /// Resolves the gesture from `start` to `end` and matches its letters.
    ///
    /// Any gesture in progress is cleared.
    pub fn on_gesture(&mut self, start: Position, end: Position) -> GestureOutcome {
        self.clear_gesture();
        let selection = self.select(start, end);
        GestureOutcome {
            selection,
            is_won: self.is_won(),
        }
    }

    fn select(&mut self, start: Position, end: Position) -> SelectionOutcome {
        if !self.status.is_in_progress() {
            return SelectionOutcome::Inactive;
        }
        let Some(size) = self.round.as_ref().map(|round| round.grid().size()) else {
            return SelectionOutcome::Inactive;
        };
        match SelectionPath::resolve(start, end, size, self.options.selection_directions()) {
            Ok(path) => self.check_selection(&path),
            Err(err) => {
                log::debug!("gesture {start} -> {end} rejected: {err}");
                SelectionOutcome::Rejected(err)
            }
        }
    }

    /// Matches the letters along `path` against the round's target words.
    ///
    /// The letters are read in traversal order. Under
    /// [`MatchPolicy::ForwardOrReverse`](crate::MatchPolicy::ForwardOrReverse) their
    /// reversal is tried as well. An unfound word takes precedence over one that
    /// was already found.
    pub fn check_selection(&mut self, path: &SelectionPath) -> SelectionOutcome {
        if !self.status.is_in_progress() {
            return SelectionOutcome::Inactive;
        }
        let Some(round) = self.round.as_mut() else {
            return SelectionOutcome::Inactive;
        };
        if path.is_empty() {
            return SelectionOutcome::NoMatch;
        }

        let Some(forward) = round.grid().letters_along(path) else {
            log::debug!("selection leaves the {0}x{0} grid", round.grid().size());
            return SelectionOutcome::NoMatch;
        };
        let reverse: Option<String> = self
            .options
            .match_policy
            .is_forward_or_reverse()
            .then(|| forward.chars().rev().collect());
        let candidates: Vec<&str> = iter::once(forward.as_str())
            .chain(reverse.as_deref())
            .collect();

        if let Some(word) = find_target(round, &candidates, false) {
            round.mark_found(word.clone());
            log::info!(
                "found {word} ({}/{})",
                round.found_words().len(),
                round.words().len()
            );
            if round.is_complete() {
                log::info!("all words found");
                self.status = SessionStatus::Won;
            }
            return SelectionOutcome::Matched(word);
        }
        match find_target(round, &candidates, true) {
            Some(word) => SelectionOutcome::AlreadyFound(word),
            None => SelectionOutcome::NoMatch,
        }
    }

    /// Returns where a found word lies in the grid.
    ///
    /// Returns `None` if `word` is not in the found set. Repeated calls return the
    /// same placement.
    #[must_use]
    pub fn found_word_placement(&self, word: &Word) -> Option<Placement> {
        let round = self.round.as_ref()?;
        if !round.is_found(word) {
            return None;
        }
        round
            .recorded_placement(word)
            .cloned()
            .or_else(|| round.grid().locate(word, self.options.directions()))
    }

    /// Anchors a drag gesture at `pos` and returns its preview path.
    ///
    /// Ignored unless a round is in progress.
    pub fn begin_gesture(&mut self, pos: Position) -> &SelectionPath {
        self.clear_gesture();
        if self.status.is_in_progress() {
            self.anchor = Some(pos);
            return self.update_gesture(pos);
        }
        &self.selection
    }

    /// Moves the free end of the drag gesture to `pos` and returns its preview path.
    ///
    /// The preview is empty while the gesture does not form a valid straight line.
    pub fn update_gesture(&mut self, pos: Position) -> &SelectionPath {
        if let (Some(anchor), Some(round)) = (self.anchor, self.round.as_ref()) {
            self.selection = SelectionPath::between(
                anchor,
                pos,
                round.grid().size(),
                self.options.selection_directions(),
            );
        }
        &self.selection
    }

    /// Releases the drag gesture at `pos` and matches it.
    pub fn end_gesture(&mut self, pos: Position) -> GestureOutcome {
        match self.anchor {
            Some(anchor) => self.on_gesture(anchor, pos),
            None => GestureOutcome {
                selection: SelectionOutcome::Inactive,
                is_won: self.is_won(),
            },
        }
    }

    /// Returns the preview path of the drag gesture in progress.
    #[must_use]
    pub fn active_selection(&self) -> &SelectionPath {
        &self.selection
    }

    fn clear_gesture(&mut self) {
        self.anchor = None;
        self.selection = SelectionPath::default();
    }

    /// Advances the round clock by `elapsed` and returns the resulting status.
    ///
    /// The clock only runs while a round is in progress. When it reaches the
    /// configured time limit the session becomes [`SessionStatus::TimedOut`].
    pub fn advance_clock(&mut self, elapsed: Duration) -> SessionStatus {
        if !self.status.is_in_progress() {
            return self.status;
        }
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self
            .options
            .time_limit
            .is_some_and(|limit| self.elapsed >= limit)
        {
            let found = self.round.as_ref().map_or(0, |r| r.found_words().len());
            log::info!("time is up with {found} words found");
            self.status = SessionStatus::TimedOut;
            self.clear_gesture();
        }
        self.status
    }

    /// Returns the time played in the current round.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the time left on the countdown, or `None` without a time limit.
    #[must_use]
    pub fn remaining_time(&self) -> Option<Duration> {
        self.options
            .time_limit
            .map(|limit| limit.saturating_sub(self.elapsed))
    }
}

fn find_target(round: &Round, candidates: &[&str], found: bool) -> Option<Word> {
    candidates.iter().find_map(|candidate| {
        round
            .words()
            .iter()
            .find(|word| word.as_str() == *candidate && round.is_found(word) == found)
            .cloned()
    })
}
