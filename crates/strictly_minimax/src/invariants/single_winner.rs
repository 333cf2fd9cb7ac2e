//! Single winner invariant: the two players never both own a line.

use super::Invariant;
use crate::rules::win::winning_lines;
use crate::{Board, Player};

/// Invariant: completed lines all belong to one player.
///
/// The game stops at the first completed line, so a board where both X and
/// O own a line cannot be reached by legal play.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owners = winning_lines(board).map(|(_, player)| player);
        let mut seen: Option<Player> = None;
        for owner in owners {
            match seen {
                Some(player) if player != owner => return false,
                _ => seen = Some(owner),
            }
        }
        true
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
