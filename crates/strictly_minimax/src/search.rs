//! Exhaustive minimax search.
//!
//! X maximizes and O minimizes the terminal utility (+1, 0, -1). Values are
//! backed up through two mutually recursive functions, [`max_value`] and
//! [`min_value`], with no pruning: every line of play below the root is
//! visited. The tree is at most nine plies deep.

use crate::config::SearchConfig;
use crate::rules::turn::to_move;
use crate::rules::win::line_owner;
use crate::rules::{initial_state, is_terminal, successors, utility};
use crate::{Action, Board, Player};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lowest utility a board can have.
const LOSS_FOR_MAX: i8 = -1;
/// Highest utility a board can have.
const WIN_FOR_MAX: i8 = 1;

/// Value of a position where X is to move.
///
/// Terminal boards score their utility; otherwise the best value X can
/// force among all children.
pub fn max_value(board: &Board) -> i8 {
    if let Some(value) = utility(board) {
        return value;
    }
    successors(board)
        .map(|(_, child)| min_value(&child))
        .fold(LOSS_FOR_MAX, i8::max)
}

/// Value of a position where O is to move.
pub fn min_value(board: &Board) -> i8 {
    if let Some(value) = utility(board) {
        return value;
    }
    successors(board)
        .map(|(_, child)| max_value(&child))
        .fold(WIN_FOR_MAX, i8::min)
}

/// Returns the optimal action for the player to move, using the default
/// [`SearchConfig`].
///
/// `None` when the board is terminal.
pub fn optimal_action(board: &Board) -> Option<Action> {
    Minimax::default().optimal_action(board)
}

/// Backed-up value of one root action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionValue {
    /// The root action.
    pub action: Action,
    /// Minimax value of the board it produces.
    pub value: i8,
}

/// Minimax engine carrying its [`SearchConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Creates an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Chooses an optimal action for the player to move.
    ///
    /// - Terminal board: `None`.
    /// - Empty board with the opening shortcut enabled: the center square,
    ///   without searching. Every first move draws under perfect play and the
    ///   center is the conventional choice.
    /// - With early exit enabled, the first action (row-major) that completes
    ///   a line is returned at once.
    /// - Otherwise X takes the action with the greatest value and O the one
    ///   with the lowest. Ties keep the earliest action in row-major order.
    #[instrument(skip(self, board), fields(board = %board.compact()))]
    pub fn optimal_action(&self, board: &Board) -> Option<Action> {
        if is_terminal(board) {
            debug!("Board is terminal, no action");
            return None;
        }

        if *self.config.opening_shortcut() && *board == initial_state() {
            debug!(action = %Action::CENTER, "Opening move");
            return Some(Action::CENTER);
        }

        let player = to_move(board);

        if *self.config.early_exit()
            && let Some((action, _)) =
                successors(board).find(|(_, child)| line_owner(child).is_some())
        {
            debug!(%player, %action, "Immediate win");
            return Some(action);
        }

        info!(%player, "Searching for optimal action");
        let values = self.evaluate(board);
        let best = select(player, &values);
        if let Some(chosen) = best {
            info!(%player, action = %chosen.action, value = chosen.value, "Found optimal action");
        }
        best.map(|b| b.action)
    }

    /// Minimax value of every legal root action, in row-major order.
    ///
    /// Empty for terminal boards. Ignores the opening shortcut and early
    /// exit; every subtree is searched in full.
    #[instrument(
        skip(self, board),
        fields(board = %board.compact(), parallel = *self.config.parallel_root())
    )]
    pub fn evaluate(&self, board: &Board) -> Vec<ActionValue> {
        let player = to_move(board);
        let value_of = move |(action, child): (Action, Board)| ActionValue {
            action,
            value: match player {
                Player::X => min_value(&child),
                Player::O => max_value(&child),
            },
        };

        let values: Vec<ActionValue> = if *self.config.parallel_root() {
            let children: Vec<(Action, Board)> = successors(board).collect();
            children.into_par_iter().map(value_of).collect()
        } else {
            successors(board).map(value_of).collect()
        };
        debug!(?values, "Root values");
        values
    }
}

/// First action with the strictly best value for `player`.
fn select(player: Player, values: &[ActionValue]) -> Option<ActionValue> {
    let mut best: Option<ActionValue> = None;
    for candidate in values {
        let improves = match best {
            None => true,
            Some(current) if player.is_max() => candidate.value > current.value,
            Some(current) => candidate.value < current.value,
        };
        if improves {
            best = Some(*candidate);
        }
    }
    best
}
