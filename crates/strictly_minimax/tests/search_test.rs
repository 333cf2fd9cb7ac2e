//! Tests for minimax search and self-play.

use strictly_minimax::{
    Action, Board, Minimax, Outcome, Player, RulesError, SearchConfig, apply, current_player,
    initial_state, legal_actions, max_value, optimal_action, outcome, self_play,
};

#[test]
fn test_opening_move_is_center() {
    assert_eq!(optimal_action(&initial_state()), Some(Action::new(1, 1)));
}

#[test]
fn test_empty_board_value_is_draw() {
    assert_eq!(max_value(&initial_state()), 0);
}

#[test]
fn test_exhaustive_opening_keeps_first_drawing_move() {
    // Every opening draws, so the tie-break picks the first square.
    let engine = Minimax::new(SearchConfig::exhaustive());
    assert_eq!(engine.optimal_action(&initial_state()), Some(Action::new(0, 0)));
}

#[test]
fn test_completes_row_for_immediate_win() {
    let board: Board = "XX./O../..O".parse().unwrap();
    assert_eq!(optimal_action(&board), Some(Action::new(0, 2)));
}

#[test]
fn test_x_only_board_is_malformed() {
    // Two X marks and no O cannot arise from alternating play. The
    // immediate-win case is covered by test_completes_row_for_immediate_win.
    let result = "XX./.../...".parse::<Board>();
    assert!(matches!(result, Err(RulesError::Malformed(_))));
}

#[test]
fn test_min_player_takes_immediate_win() {
    // O to move: (1,2) completes the middle row; X threatens (0,2).
    let board: Board = "XX./OO./X..".parse().unwrap();
    assert_eq!(current_player(&board), Ok(Player::O));
    assert_eq!(optimal_action(&board), Some(Action::new(1, 2)));

    let exhaustive = Minimax::new(SearchConfig::exhaustive());
    assert_eq!(exhaustive.optimal_action(&board), Some(Action::new(1, 2)));
}

#[test]
fn test_early_exit_agrees_on_value() {
    // O to move. (2,2) wins at once; (0,2) comes first in row-major order
    // and wins too, through a double threat.
    let board: Board = "OX./XO./.X.".parse().unwrap();
    let early = optimal_action(&board).unwrap();
    let full = Minimax::new(SearchConfig::exhaustive())
        .optimal_action(&board)
        .unwrap();
    assert_eq!(early, Action::new(2, 2));
    assert_eq!(full, Action::new(0, 2));

    let value_after = |action: Action| max_value(&apply(&board, action).unwrap());
    assert_eq!(value_after(early), -1);
    assert_eq!(value_after(full), -1);
}

#[test]
fn test_terminal_board_has_no_action() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(optimal_action(&board), None);
}

#[test]
fn test_self_play_from_start_draws() {
    let game = self_play(initial_state(), &Minimax::default()).unwrap();
    assert_eq!(*game.outcome(), Outcome::Draw);
    assert_eq!(outcome(game.board()), Some(Outcome::Draw));
}

#[test]
fn test_self_play_exhaustive_draws() {
    let game = self_play(initial_state(), &Minimax::new(SearchConfig::exhaustive())).unwrap();
    assert_eq!(*game.outcome(), Outcome::Draw);
}

#[test]
fn test_parallel_root_matches_sequential() {
    let sequential = Minimax::new(SearchConfig::exhaustive());
    let parallel = Minimax::new(SearchConfig::exhaustive().with_parallel_root(true));

    for text in ["X../.../...", "X../.O./...", "XO./.X./...", "XX./OO./X.."] {
        let board: Board = text.parse().unwrap();
        assert_eq!(sequential.evaluate(&board), parallel.evaluate(&board), "{}", text);
        assert_eq!(
            sequential.optimal_action(&board),
            parallel.optimal_action(&board),
            "{}",
            text
        );
    }
}

/// Plays `engine` as `side` against every possible reply and checks the
/// engine never loses.
fn assert_never_loses(board: Board, side: Player, engine: &Minimax) {
    if let Some(result) = outcome(&board) {
        assert_ne!(result.winner(), Some(side.opponent()), "Lost at {}", board.compact());
        return;
    }

    if current_player(&board) == Ok(side) {
        let action = engine.optimal_action(&board).expect("Non-terminal board");
        assert_never_loses(apply(&board, action).unwrap(), side, engine);
    } else {
        for action in legal_actions(&board).unwrap() {
            assert_never_loses(apply(&board, action).unwrap(), side, engine);
        }
    }
}

#[test]
fn test_x_never_loses_against_any_opponent() {
    assert_never_loses(initial_state(), Player::X, &Minimax::default());
}

#[test]
fn test_o_never_loses_against_any_opponent() {
    assert_never_loses(initial_state(), Player::O, &Minimax::default());
}

#[test]
fn test_takes_win_when_opponent_blunders() {
    // X opens center, O plays an edge; X can force a win.
    let board: Board = ".O./.X./...".parse().unwrap();
    let game = self_play(board, &Minimax::default()).unwrap();
    assert_eq!(*game.outcome(), Outcome::MaxWins);
}
