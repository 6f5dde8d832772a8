//! Attack and check queries.
//!
//! `is_square_attacked` is the foundation shared by castling legality, the
//! self-check filter, and terminal-state evaluation. It probes each attacker
//! class in reverse: a knight attacks `square` exactly when a knight sits on
//! one of the knight-attack squares of `square`, and similarly for the rest.
//! Queries never mutate state.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.pieces[color.index()][PieceKind::King.index()];
    if kings == 0 {
        None
    } else {
        Some(kings.trailing_zeros() as Square)
    }
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attacker = &game_state.pieces[attacker_color.index()];

    // A pawn of `attacker_color` attacks `square` iff `square` is a pawn
    // attack of the opposite color seen from `square`.
    let pawns = attacker[PieceKind::Pawn.index()];
    if pawn_attacks(attacker_color.opposite(), square) & pawns != 0 {
        return true;
    }

    if knight_attacks(square) & attacker[PieceKind::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & attacker[PieceKind::King.index()] != 0 {
        return true;
    }

    let diagonal_sliders =
        attacker[PieceKind::Bishop.index()] | attacker[PieceKind::Queen.index()];
    if bishop_attacks(square, game_state.occupancy_all) & diagonal_sliders != 0 {
        return true;
    }

    let straight_sliders = attacker[PieceKind::Rook.index()] | attacker[PieceKind::Queen.index()];
    if rook_attacks(square, game_state.occupancy_all) & straight_sliders != 0 {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked, king_square};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn square(name: &str) -> u8 {
        algebraic_to_square(name).expect("square should parse")
    }

    #[test]
    fn pawn_attack_direction_depends_on_color() {
        let state =
            GameState::from_fen("4k3/8/8/8/4p3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");

        // White pawn on e2 attacks d3/f3; black pawn on e4 attacks d3/f3.
        assert!(is_square_attacked(&state, square("d3"), Color::White));
        assert!(is_square_attacked(&state, square("d3"), Color::Black));
        assert!(!is_square_attacked(&state, square("d5"), Color::White));
        assert!(!is_square_attacked(&state, square("e3"), Color::Black));
    }

    #[test]
    fn slider_attacks_stop_at_blockers() {
        let state =
            GameState::from_fen("4k3/8/8/8/1R2p3/8/8/4K3 w - - 0 1").expect("FEN should parse");

        assert!(is_square_attacked(&state, square("e4"), Color::White));
        assert!(!is_square_attacked(&state, square("f4"), Color::White));
        assert!(is_square_attacked(&state, square("b8"), Color::White));
    }

    #[test]
    fn check_detection_sees_knight_fork() {
        let state =
            GameState::from_fen("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1").expect("FEN should parse");

        assert_eq!(king_square(&state, Color::White), Some(square("e1")));
        assert!(is_king_in_check(&state, Color::White));
        assert!(!is_king_in_check(&state, Color::Black));
    }
}
