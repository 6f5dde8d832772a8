//! Uniform-random move chooser.
//!
//! Selects uniformly from the legal set. Used for low-strength play and as
//! the deterministic (seeded) opponent in integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::MoveChooser;
use crate::game_state::chess_types::Move;

pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed-seed chooser for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RandomChooser {
    fn choose_move(&mut self, legal_moves: &[Move]) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..legal_moves.len());
        Some(legal_moves[index])
    }
}
