//! Engine-versus-engine play.

use crate::rules::{apply, current_player, outcome};
use crate::{Board, Minimax, Move, Outcome, RulesError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Record of a game played out by the engine against itself.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SelfPlay {
    /// Position the game started from.
    start: Board,
    /// Every move made, in order.
    moves: Vec<Move>,
    /// Terminal board.
    board: Board,
    /// Result of the game.
    outcome: Outcome,
}

/// Plays `start` out to the end with both sides choosing `engine`'s
/// optimal action.
///
/// A terminal `start` returns immediately with no moves.
///
/// # Errors
///
/// Propagates [`RulesError`] from the rules engine. With a correct engine
/// this does not happen for any board that parsed successfully.
#[instrument(skip(start, engine), fields(start = %start.compact()))]
pub fn self_play(start: Board, engine: &Minimax) -> Result<SelfPlay, RulesError> {
    let mut board = start;
    let mut moves = Vec::new();

    loop {
        if let Some(outcome) = outcome(&board) {
            info!(%outcome, plies = moves.len(), "Self-play finished");
            return Ok(SelfPlay {
                start,
                moves,
                board,
                outcome,
            });
        }

        let player = current_player(&board)?;
        let action = engine.optimal_action(&board).ok_or(RulesError::GameOver)?;
        board = apply(&board, action)?;
        debug!(%player, %action, board = %board.compact(), "Self-play move");
        moves.push(Move::new(player, action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Player, initial_state};

    #[test]
    fn test_terminal_start_has_no_moves() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let game = self_play(board, &Minimax::default()).unwrap();
        assert!(game.moves().is_empty());
        assert_eq!(*game.outcome(), Outcome::MaxWins);
        assert_eq!(*game.board(), board);
    }

    #[test]
    fn test_perfect_play_draws() {
        let game = self_play(initial_state(), &Minimax::default()).unwrap();
        assert_eq!(*game.outcome(), Outcome::Draw);
        assert_eq!(game.moves().len(), 9);
        assert_eq!(game.moves()[0], Move::new(Player::X, Action::CENTER));
    }

    #[test]
    fn test_moves_alternate() {
        let game = self_play(initial_state(), &Minimax::default()).unwrap();
        for (i, mov) in game.moves().iter().enumerate() {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(mov.player, expected);
        }
    }
}
