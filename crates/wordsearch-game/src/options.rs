use std::time::Duration;

use wordsearch_core::DirectionSet;
use wordsearch_generator::PuzzleGenerator;

/// Whether a selection may spell a target word backwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchPolicy {
    /// Letters are read in the order the gesture traversed them only.
    #[default]
    Forward,
    /// A gesture dragged from a word's last letter to its first also matches.
    ForwardOrReverse,
}

impl MatchPolicy {
    /// Maps an `allow_reverse_match` flag onto a policy.
    #[must_use]
    pub fn from_allow_reverse(allow_reverse_match: bool) -> Self {
        if allow_reverse_match {
            Self::ForwardOrReverse
        } else {
            Self::Forward
        }
    }
}

/// Configuration for a [`Session`](crate::Session).
///
/// The generator's direction set is the single direction policy for the session:
/// it governs placement, which gestures resolve into paths, and where found words
/// are searched for.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use wordsearch_core::DirectionSet;
/// use wordsearch_game::{MatchPolicy, SessionOptions};
/// use wordsearch_generator::PuzzleGenerator;
///
/// let options = SessionOptions::default()
///     .generator(PuzzleGenerator::new(15).with_directions(DirectionSet::LEGACY_SIX))
///     .match_policy(MatchPolicy::ForwardOrReverse)
///     .time_limit(Some(SessionOptions::CLASSIC_TIME_LIMIT));
///
/// assert_eq!(options.directions().len(), 6);
/// assert_eq!(options.time_limit, Some(Duration::from_secs(300)));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Grid size, placement directions and retry budget.
    pub generator: PuzzleGenerator,
    /// Whether reverse selections match.
    pub match_policy: MatchPolicy,
    /// Countdown for each round; `None` disables timing out.
    pub time_limit: Option<Duration>,
}

impl SessionOptions {
    /// Five-minute countdown of the classic game.
    pub const CLASSIC_TIME_LIMIT: Duration = Duration::from_secs(300);

    /// Sets the puzzle generator.
    #[must_use]
    pub fn generator(mut self, generator: PuzzleGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the match policy.
    #[must_use]
    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Sets the round countdown.
    #[must_use]
    pub fn time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Returns the session's direction policy.
    #[must_use]
    pub fn directions(&self) -> DirectionSet {
        self.generator.directions()
    }

    /// Returns the directions a gesture may run in.
    ///
    /// Under [`MatchPolicy::ForwardOrReverse`] a word placed in one direction may
    /// be selected from its last letter, so the opposites of the placement
    /// directions are allowed too.
    #[must_use]
    pub fn selection_directions(&self) -> DirectionSet {
        match self.match_policy {
            MatchPolicy::Forward => self.directions(),
            MatchPolicy::ForwardOrReverse => self.directions().with_opposites(),
        }
    }
}
