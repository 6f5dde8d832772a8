use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

/// Internal invalid-state signal. A well-formed `GameState` never produces
/// this; it exists so corruption surfaces as an error instead of a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// One legal move paired with the successor state that playing it produces.
///
/// The generator already applied the move while filtering out self-check, so
/// the successor comes for free and callers need not re-apply.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
}

pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
