//! Central board state representation.
//!
//! `GameState` stores piece bitboards, occupancy caches, turn and rights
//! flags, clocks, and the history stacks that make applied moves exactly
//! reversible. Two states compare equal only when every field, including the
//! history stacks, matches.

use crate::game_state::chess_errors::ParseError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square};
use crate::game_state::undo_state::UndoState;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches, kept in sync by `recalc_occupancy`.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // Position identity for repetition detection. `repetition_history`
    // always includes the key of the current position as its last entry.
    pub zobrist_key: u64,
    pub repetition_history: Vec<u64>,

    // Undo records, one per applied move.
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            zobrist_key: 0,
            repetition_history: Vec::new(),
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board with no pieces. Used by the FEN parser as a canvas.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece of `color` on `square`, if any.
    #[inline]
    pub fn piece_at_for(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = 1u64 << square;
        if (self.occupancy_by_color[color.index()] & mask) == 0 {
            return None;
        }
        PieceKind::ALL
            .into_iter()
            .find(|kind| (self.pieces[color.index()][kind.index()] & mask) != 0)
    }

    /// Piece on `square` regardless of color, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        if let Some(kind) = self.piece_at_for(Color::White, square) {
            return Some((Color::White, kind));
        }
        if let Some(kind) = self.piece_at_for(Color::Black, square) {
            return Some((Color::Black, kind));
        }
        None
    }

    /// Rebuild both occupancy caches from the piece bitboards.
    pub fn recalc_occupancy(&mut self) {
        for color in [Color::White, Color::Black] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all =
            self.occupancy_by_color[Color::White.index()] | self.occupancy_by_color[Color::Black.index()];
    }

    /// How many times the current position has occurred, itself included.
    #[inline]
    pub fn repetition_count(&self) -> usize {
        let current = self.zobrist_key;
        self.repetition_history
            .iter()
            .filter(|key| **key == current)
            .count()
    }
}
