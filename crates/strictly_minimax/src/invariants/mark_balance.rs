//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and players alternate, so after every move X either has
/// the same number of marks as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.mark_count(Player::X);
        let o = board.mark_count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
