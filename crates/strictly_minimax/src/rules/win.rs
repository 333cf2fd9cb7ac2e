//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Player, Square};
use tracing::instrument;

/// The eight lines, checked in this order: rows, columns, diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Every completed line together with its owner, in [`LINES`] order.
pub fn winning_lines(board: &Board) -> impl Iterator<Item = ([Action; 3], Player)> + '_ {
    LINES.into_iter().filter_map(move |[a, b, c]| {
        let sq = board.square(a)?;
        let complete = Some(sq) == board.square(b) && Some(sq) == board.square(c);
        match sq {
            Square::Occupied(player) if complete => Some(([a, b, c], player)),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in row, column, diagonal
/// order, or `None`.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn winner(board: &Board) -> Option<Player> {
    winning_lines(board).next().map(|(_, player)| player)
}

/// Winner lookup for the search hot path, without a span.
pub(crate) fn line_owner(board: &Board) -> Option<Player> {
    winning_lines(board).next().map(|(_, player)| player)
}
