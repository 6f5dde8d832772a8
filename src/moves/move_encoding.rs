//! Packed move representation.
//!
//! A move is a `u32` carrying everything needed to apply and reverse it:
//!
//! ```text
//! bits  0..6   source square
//! bits  6..12  target square
//! bits 12..15  moved piece kind
//! bits 15..18  captured piece kind (0x7 = none)
//! bits 18..21  promotion piece kind (0x7 = none)
//! bits 21..    flags
//! ```

use crate::game_state::chess_types::{Move, PieceKind, Square};

const SOURCE_SHIFT: u32 = 0;
const TARGET_SHIFT: u32 = 6;
const MOVED_SHIFT: u32 = 12;
const CAPTURED_SHIFT: u32 = 15;
const PROMOTION_SHIFT: u32 = 18;

const SQUARE_MASK: u32 = 0x3F;
const KIND_MASK: u32 = 0x7;
const NO_KIND: u32 = 0x7;

pub const FLAG_CAPTURE: Move = 1 << 21;
pub const FLAG_DOUBLE_PAWN_PUSH: Move = 1 << 22;
pub const FLAG_EN_PASSANT: Move = 1 << 23;
pub const FLAG_CASTLE_KINGSIDE: Move = 1 << 24;
pub const FLAG_CASTLE_QUEENSIDE: Move = 1 << 25;

/// Either castling flag.
pub const FLAG_CASTLE_ANY: Move = FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE;

#[inline]
pub fn encode_move(
    source: Square,
    target: Square,
    moved: PieceKind,
    captured: Option<PieceKind>,
    promotion: Option<PieceKind>,
    flags: Move,
) -> Move {
    let mut out = flags;
    out |= (source as u32) << SOURCE_SHIFT;
    out |= (target as u32) << TARGET_SHIFT;
    out |= (moved.index() as u32) << MOVED_SHIFT;
    out |= captured.map_or(NO_KIND, |kind| kind.index() as u32) << CAPTURED_SHIFT;
    out |= promotion.map_or(NO_KIND, |kind| kind.index() as u32) << PROMOTION_SHIFT;
    out
}

#[inline]
pub fn move_source(mv: Move) -> Square {
    ((mv >> SOURCE_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_target(mv: Move) -> Square {
    ((mv >> TARGET_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_moved_kind(mv: Move) -> PieceKind {
    kind_from_code((mv >> MOVED_SHIFT) & KIND_MASK).unwrap_or(PieceKind::Pawn)
}

#[inline]
pub fn move_captured_kind(mv: Move) -> Option<PieceKind> {
    kind_from_code((mv >> CAPTURED_SHIFT) & KIND_MASK)
}

#[inline]
pub fn move_promotion_kind(mv: Move) -> Option<PieceKind> {
    kind_from_code((mv >> PROMOTION_SHIFT) & KIND_MASK)
}

#[inline]
fn kind_from_code(code: u32) -> Option<PieceKind> {
    match code {
        0 => Some(PieceKind::Pawn),
        1 => Some(PieceKind::Knight),
        2 => Some(PieceKind::Bishop),
        3 => Some(PieceKind::Rook),
        4 => Some(PieceKind::Queen),
        5 => Some(PieceKind::King),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        encode_move, move_captured_kind, move_moved_kind, move_promotion_kind, move_source,
        move_target, FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_EN_PASSANT,
    };
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn encode_decode_round_trip() {
        let mv = encode_move(
            12,
            21,
            PieceKind::Pawn,
            Some(PieceKind::Knight),
            Some(PieceKind::Queen),
            FLAG_CAPTURE,
        );
        assert_eq!(move_source(mv), 12);
        assert_eq!(move_target(mv), 21);
        assert_eq!(move_moved_kind(mv), PieceKind::Pawn);
        assert_eq!(move_captured_kind(mv), Some(PieceKind::Knight));
        assert_eq!(move_promotion_kind(mv), Some(PieceKind::Queen));
        assert_ne!(mv & FLAG_CAPTURE, 0);
        assert_eq!(mv & FLAG_EN_PASSANT, 0);
    }

    #[test]
    fn quiet_move_has_no_capture_or_promotion() {
        let mv = encode_move(4, 6, PieceKind::King, None, None, FLAG_CASTLE_KINGSIDE);
        assert_eq!(move_captured_kind(mv), None);
        assert_eq!(move_promotion_kind(mv), None);
        assert_eq!(move_moved_kind(mv), PieceKind::King);
    }
}
