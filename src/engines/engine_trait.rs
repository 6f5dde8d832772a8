//! Move-selection abstraction.
//!
//! A chooser picks one move out of the legal set; the core engine never
//! depends on a concrete strategy. The slice a chooser receives is exactly
//! the generator's output order, so deterministic choosers (fixed index,
//! seeded random) are reproducible.

use crate::game_state::chess_types::Move;

pub trait MoveChooser {
    /// Reset any per-game state. Stateless choosers keep the default no-op.
    fn new_game(&mut self) {}

    /// Pick one of `legal_moves`, or `None` when the slice is empty.
    fn choose_move(&mut self, legal_moves: &[Move]) -> Option<Move>;
}
