//! Error types for hand and presentation operations.

use thiserror::Error;

/// Errors that can occur when drawing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The card pool has no cards to draw from.
    #[error("no cards available in the card pool")]
    EmptyPool,
}

/// Errors that can occur when selecting a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The slot index is past the end of the hand.
    #[error("slot {index} is out of range for a hand of {len} card(s)")]
    OutOfRange {
        /// Requested slot.
        index: usize,
        /// Current hand size.
        len: usize,
    },
}

/// Errors that can occur while routing UI events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PresentError {
    /// A required view collaborator was not supplied.
    #[error("missing component: {0}")]
    MissingComponent(&'static str),
    /// The action needs a selected card and none is selected.
    #[error("no card is selected")]
    NoSelection,
    /// Drawing the hand failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Selecting a card failed.
    #[error(transparent)]
    Select(#[from] SelectError),
}
