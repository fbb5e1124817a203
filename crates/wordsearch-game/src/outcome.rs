use wordsearch_core::{PathError, Word};

/// Lifecycle of a [`Session`](crate::Session).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    /// No round has been started.
    #[default]
    NotStarted,
    /// A round is being played and gestures are accepted.
    InProgress,
    /// Every target word was found. Terminal until the next round.
    Won,
    /// The countdown ran out before every word was found.
    TimedOut,
}

/// What a single selection did to the round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// The selection spelled an unfound target word, which is now found.
    Matched(Word),
    /// The selection spelled a target word that was already found.
    AlreadyFound(Word),
    /// The selection spelled no target word.
    NoMatch,
    /// The gesture did not resolve into a straight path.
    Rejected(PathError),
    /// No round is in progress.
    Inactive,
}

/// Result of a completed gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureOutcome {
    /// What the gesture's selection did.
    pub selection: SelectionOutcome,
    /// Whether the session is won after the gesture.
    pub is_won: bool,
}

impl GestureOutcome {
    /// Returns the newly found word, if any.
    #[must_use]
    pub fn matched(&self) -> Option<&Word> {
        match &self.selection {
            SelectionOutcome::Matched(word) => Some(word),
            _ => None,
        }
    }
}
