//! Error types for the rules engine.

use crate::action::Action;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    /// Row or column outside 0..=2.
    #[display("out of bounds")]
    OutOfBounds,
    /// The square already holds a mark.
    #[display("square is already occupied")]
    Occupied,
    /// The board is terminal, so no action is legal.
    #[display("game is already over")]
    GameOver,
}

/// Error that can occur when querying or advancing a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// The requested move cannot be applied to this board.
    #[display("Invalid action {}: {}", action, reason)]
    InvalidAction {
        /// The rejected action.
        action: Action,
        /// Why it was rejected.
        reason: InvalidReason,
    },

    /// The board is terminal; there is no mover and no legal action.
    #[display("Game is already over")]
    GameOver,

    /// The board could not arise from legal play.
    #[display("Malformed board: {}", _0)]
    Malformed(String),
}

impl RulesError {
    /// Creates an invalid-action error.
    pub fn invalid(action: Action, reason: InvalidReason) -> Self {
        Self::InvalidAction { action, reason }
    }
}

impl std::error::Error for RulesError {}
