//! Strictly Minimax - exhaustive game-tree search for tic-tac-toe
//!
//! Given any board reachable from the empty grid, the library works out who
//! moves next, which squares are open, and which move is optimal under
//! perfect play by both sides.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Action`], checked
//!   against [`BoardInvariants`] when parsed or built from rows
//! - **Rules**: [`current_player`], [`legal_actions`], [`apply`],
//!   [`winner`], [`is_terminal`], [`utility`]
//! - **Search**: [`max_value`], [`min_value`], [`optimal_action`] and the
//!   configurable [`Minimax`] engine
//! - **Self-play**: [`self_play`] runs the engine against itself
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, initial_state, optimal_action};
//!
//! assert_eq!(optimal_action(&initial_state()), Some(Action::new(1, 1)));
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(optimal_action(&board), Some(Action::new(0, 2)));
//! # Ok::<(), strictly_minimax::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod error;
mod invariants;
mod rules;
mod search;
mod selfplay;
mod types;

// Crate-level exports - Board model
pub use action::{Action, Move};
pub use types::{Board, Outcome, Player, SIZE, Square};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant,
};

// Crate-level exports - Errors
pub use error::{InvalidReason, RulesError};

// Crate-level exports - Rules
pub use rules::{
    apply, current_player, initial_state, is_full, is_terminal, legal_actions, outcome,
    successors, utility, winner,
};

// Crate-level exports - Search
pub use config::{ConfigError, SearchConfig};
pub use search::{ActionValue, Minimax, max_value, min_value, optimal_action};
pub use selfplay::{SelfPlay, self_play};
