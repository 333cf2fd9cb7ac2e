//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. Rules are separated
//! from board storage so the search can drive them directly.

pub mod terminal;
pub mod turn;
pub mod win;

pub use terminal::{is_full, is_terminal, outcome, utility};
pub use turn::{apply, current_player, initial_state, legal_actions, successors};
pub use win::winner;
