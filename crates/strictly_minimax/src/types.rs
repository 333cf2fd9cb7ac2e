//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::error::RulesError;
use crate::invariants::{BoardInvariants, InvariantSet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
///
/// `X` moves first and maximizes the outcome, `O` moves second and
/// minimizes it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, max player).
    X,
    /// Player O (goes second, min player).
    O,
}

impl Player {
    /// The maximizing side.
    pub const MAX: Player = Player::X;
    /// The minimizing side.
    pub const MIN: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns true for the maximizing side.
    pub fn is_max(self) -> bool {
        self == Player::MAX
    }

    fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '_' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board, indexed `(row, col)` in row-major order.
///
/// Boards are plain values: every move produces a new board and the
/// original is left untouched. Boards built through [`Board::from_rows`],
/// [`FromStr`] or deserialization are checked against
/// [`BoardInvariants`], so a `Board` in hand always has a legal mark
/// balance and at most one winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows, validating its structure.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Malformed`] if the marks could not arise from
    /// alternating play starting with `X`.
    #[instrument]
    pub fn from_rows(squares: [[Square; SIZE]; SIZE]) -> Result<Self, RulesError> {
        let board = Self { squares };
        board.validate()?;
        Ok(board)
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.squares.get(row)?.get(col).copied()
    }

    /// Gets the square addressed by an action.
    pub fn square(&self, action: Action) -> Option<Square> {
        self.get(action.row(), action.col())
    }

    /// Checks if the square at an action is on the board and empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.square(action), Some(Square::Empty))
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Iterates over every square with its coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Action, Square)> + '_ {
        Action::ALL.into_iter().map(|action| {
            (action, self.squares[action.row()][action.col()])
        })
    }

    /// Number of marks `player` has on the board.
    pub fn mark_count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, square)| *square == Square::Occupied(player))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.cells()
            .filter(|(_, square)| *square == Square::Empty)
            .count()
    }

    /// Returns a copy with `player`'s mark at `action`.
    ///
    /// Callers must pass an in-range action; legality is the rules engine's
    /// concern.
    pub(crate) fn with_mark(&self, action: Action, player: Player) -> Self {
        let mut next = *self;
        next.squares[action.row()][action.col()] = Square::Occupied(player);
        next
    }

    /// Compact single-line form, e.g. `XO./.X./..O`.
    pub fn compact(&self) -> String {
        self.squares
            .iter()
            .map(|row| row.iter().map(|s| s.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn validate(&self) -> Result<(), RulesError> {
        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(board = %self.compact(), %descriptions, "Board failed validation");
            RulesError::Malformed(descriptions)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                write!(f, "{}", square.symbol())?;
                if c < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = RulesError;

    /// Parses nine cells (`X`, `O`, `.` or `_`), ignoring whitespace and the
    /// separators `|`, `/`, `-`, `+`. Both [`Board::compact`] and `Display`
    /// output parse back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for c in s.chars() {
            if c.is_whitespace() || matches!(c, '|' | '/' | '-' | '+') {
                continue;
            }
            let square = Square::from_symbol(c)
                .ok_or_else(|| RulesError::Malformed(format!("Unknown cell symbol {:?}", c)))?;
            cells.push(square);
        }

        if cells.len() != SIZE * SIZE {
            return Err(RulesError::Malformed(format!(
                "Expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        let mut squares = [[Square::Empty; SIZE]; SIZE];
        for (i, square) in cells.into_iter().enumerate() {
            squares[i / SIZE][i % SIZE] = square;
        }
        Self::from_rows(squares)
    }
}

impl TryFrom<String> for Board {
    type Error = RulesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.compact()
    }
}

/// Result of a finished game, from the max player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// X completed a line.
    #[display("X wins")]
    MaxWins,
    /// O completed a line.
    #[display("O wins")]
    MinWins,
    /// Board full with no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Numeric value: +1, -1 or 0.
    pub fn utility(self) -> i8 {
        match self {
            Outcome::MaxWins => 1,
            Outcome::MinWins => -1,
            Outcome::Draw => 0,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::MaxWins => Some(Player::MAX),
            Outcome::MinWins => Some(Player::MIN),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl From<Player> for Outcome {
    fn from(winner: Player) -> Self {
        match winner {
            Player::X => Outcome::MaxWins,
            Player::O => Outcome::MinWins,
        }
    }
}
