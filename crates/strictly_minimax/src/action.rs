//! First-class action types for tic-tac-toe.
//!
//! An [`Action`] is just a coordinate; whether it is legal depends on the
//! board it is applied to. A [`Move`] pairs an action with the player who
//! made it and is what self-play records.

use crate::types::{Player, SIZE};
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate, both 0-indexed.
///
/// Any pair is representable. [`crate::apply`] rejects pairs outside the
/// board or pointing at an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Every on-board action in row-major order.
    ///
    /// This is the enumeration order used by [`crate::legal_actions`] and
    /// therefore the tie-break order of the search.
    pub const ALL: [Action; SIZE * SIZE] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// The center square.
    pub const CENTER: Action = Action::new(1, 1);

    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Whether the coordinate lies on a 3x3 board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move in tic-tac-toe: a player placing their mark at an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub action: Action,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, action: Action) -> Self {
        Self { player, action }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.action)
    }
}
