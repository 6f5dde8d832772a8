use crate::game_state::chess_types::{CastlingRights, Move, Square};

/// Single undo record pushed by `apply_move` and popped by `undo_move`.
///
/// The moved, captured, and promotion kinds are read back out of the packed
/// move; only state that the move does not encode is stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_zobrist_key: u64,
}
