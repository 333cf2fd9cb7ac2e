//! Terminal detection and scoring.

use super::win::line_owner;
use crate::{Board, Outcome, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, s)| s != Square::Empty)
}

/// Returns true if the game is over: someone has a line or the board is full.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}

/// Outcome of a terminal board, `None` while the game is still going.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match line_owner(board) {
        Some(winner) => Some(Outcome::from(winner)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}

/// Score of a terminal board: +1 if X won, -1 if O won, 0 for a draw.
///
/// Returns `None` for a board that is not terminal; there is no score to
/// give while moves remain.
pub fn utility(board: &Board) -> Option<i8> {
    outcome(board).map(Outcome::utility)
}
