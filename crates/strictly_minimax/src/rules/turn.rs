//! Turn order, legal actions and move application.

use super::terminal::is_terminal;
use crate::{Action, Board, InvalidReason, Player, RulesError};
use tracing::{debug, instrument};

/// Returns the starting board: nine empty squares.
pub fn initial_state() -> Board {
    Board::new()
}

/// Mover on a board assumed to be non-terminal.
///
/// X moves when both sides have placed the same number of marks, O when X
/// is one ahead.
pub(crate) fn to_move(board: &Board) -> Player {
    if board.mark_count(Player::X) > board.mark_count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns the player who has the next turn.
///
/// # Errors
///
/// Returns [`RulesError::GameOver`] on a terminal board.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn current_player(board: &Board) -> Result<Player, RulesError> {
    if is_terminal(board) {
        return Err(RulesError::GameOver);
    }
    Ok(to_move(board))
}

/// Returns every empty square, in row-major order.
///
/// # Errors
///
/// Returns [`RulesError::GameOver`] on a terminal board.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn legal_actions(board: &Board) -> Result<Vec<Action>, RulesError> {
    if is_terminal(board) {
        return Err(RulesError::GameOver);
    }
    Ok(empty_squares(board).collect())
}

/// Returns the board that results from the current player marking `action`.
///
/// The input board is left unchanged.
///
/// # Errors
///
/// Returns [`RulesError::InvalidAction`] if the action is off the board,
/// targets an occupied square, or the board is already terminal.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn apply(board: &Board, action: Action) -> Result<Board, RulesError> {
    if !action.in_bounds() {
        return Err(RulesError::invalid(action, InvalidReason::OutOfBounds));
    }
    if is_terminal(board) {
        return Err(RulesError::invalid(action, InvalidReason::GameOver));
    }
    if !board.is_empty(action) {
        return Err(RulesError::invalid(action, InvalidReason::Occupied));
    }

    let player = to_move(board);
    debug!(%player, "Placing mark");
    Ok(board.with_mark(action, player))
}

/// Every legal action paired with the board it produces.
///
/// Empty for terminal boards. Used by the search, which has already ruled
/// out the error cases of [`legal_actions`] and [`apply`].
pub fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let live = super::terminal::outcome(board).is_none();
    let player = to_move(board);
    empty_squares(board)
        .filter(move |_| live)
        .map(move |action| (action, board.with_mark(action, player)))
}

fn empty_squares(board: &Board) -> impl Iterator<Item = Action> + '_ {
    Action::ALL
        .into_iter()
        .filter(move |action| board.is_empty(*action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_mover_is_x() {
        assert_eq!(current_player(&initial_state()), Ok(Player::X));
    }

    #[test]
    fn test_o_moves_after_x() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(current_player(&board), Ok(Player::O));
    }

    #[test]
    fn test_current_player_on_terminal_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(current_player(&board), Err(RulesError::GameOver));
        assert_eq!(legal_actions(&board), Err(RulesError::GameOver));
    }

    #[test]
    fn test_legal_actions_are_empty_squares() {
        let board: Board = "X../.O./...".parse().unwrap();
        let actions = legal_actions(&board).unwrap();
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Action::new(0, 0)));
        assert!(!actions.contains(&Action::CENTER));
        assert_eq!(actions[0], Action::new(0, 1));
    }

    #[test]
    fn test_apply_marks_current_player() {
        let board: Board = "X../.../...".parse().unwrap();
        let next = apply(&board, Action::CENTER).unwrap();
        assert_eq!(next.square(Action::CENTER), Some(Square::Occupied(Player::O)));
        assert_eq!(board.square(Action::CENTER), Some(Square::Empty));
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(
            apply(&board, Action::new(0, 0)),
            Err(RulesError::invalid(Action::new(0, 0), InvalidReason::Occupied))
        );
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let action = Action::new(3, 1);
        assert_eq!(
            apply(&initial_state(), action),
            Err(RulesError::invalid(action, InvalidReason::OutOfBounds))
        );
    }

    #[test]
    fn test_apply_rejects_terminal_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let action = Action::new(2, 2);
        assert_eq!(
            apply(&board, action),
            Err(RulesError::invalid(action, InvalidReason::GameOver))
        );
    }

    #[test]
    fn test_successors_match_legal_actions() {
        let board: Board = "XO./.X./...".parse().unwrap();
        let from_successors: Vec<_> = successors(&board).map(|(a, _)| a).collect();
        assert_eq!(from_successors, legal_actions(&board).unwrap());
        for (action, child) in successors(&board) {
            assert_eq!(Ok(child), apply(&board, action));
        }
    }

    #[test]
    fn test_successors_empty_when_terminal() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(successors(&board).count(), 0);
    }
}
