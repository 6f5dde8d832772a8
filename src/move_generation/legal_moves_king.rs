use crate::game_state::chess_types::{CastlingRights, Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::attack_tables::king_attacks;
use crate::moves::move_encoding::{
    encode_move, FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE,
};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];

    let king_bb = game_state.pieces[side.index()][PieceKind::King.index()];
    if king_bb == 0 {
        return;
    }
    let source = king_bb.trailing_zeros() as Square;

    let mut targets = king_attacks(source) & !own_occ;
    while targets != 0 {
        let target = targets.trailing_zeros() as Square;
        targets &= targets - 1;

        if (1u64 << target) & enemy_occ != 0 {
            let captured = game_state.piece_at_for(side.opposite(), target);
            out.push(encode_move(
                source,
                target,
                PieceKind::King,
                captured,
                None,
                FLAG_CAPTURE,
            ));
        } else {
            out.push(encode_move(source, target, PieceKind::King, None, None, 0));
        }
    }

    generate_castling_moves(game_state, source, out);
}

/// Castling wing description: required right, squares that must be empty,
/// squares the king crosses (which must be unattacked), and the king target.
struct CastlingWing {
    right: CastlingRights,
    empty_squares: u64,
    transit_squares: [Square; 2],
    king_target: Square,
    flag: Move,
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    // Castling starts from the home square and never out of check.
    let home: Square = match side {
        Color::White => 4,
        Color::Black => 60,
    };
    if king_from != home || is_square_attacked(game_state, home, enemy) {
        return;
    }

    let wings: [CastlingWing; 2] = match side {
        Color::White => [
            CastlingWing {
                right: CastlingRights::WHITE_KINGSIDE,
                empty_squares: (1u64 << 5) | (1u64 << 6),
                transit_squares: [5, 6],
                king_target: 6,
                flag: FLAG_CASTLE_KINGSIDE,
            },
            CastlingWing {
                right: CastlingRights::WHITE_QUEENSIDE,
                empty_squares: (1u64 << 1) | (1u64 << 2) | (1u64 << 3),
                transit_squares: [3, 2],
                king_target: 2,
                flag: FLAG_CASTLE_QUEENSIDE,
            },
        ],
        Color::Black => [
            CastlingWing {
                right: CastlingRights::BLACK_KINGSIDE,
                empty_squares: (1u64 << 61) | (1u64 << 62),
                transit_squares: [61, 62],
                king_target: 62,
                flag: FLAG_CASTLE_KINGSIDE,
            },
            CastlingWing {
                right: CastlingRights::BLACK_QUEENSIDE,
                empty_squares: (1u64 << 57) | (1u64 << 58) | (1u64 << 59),
                transit_squares: [59, 58],
                king_target: 58,
                flag: FLAG_CASTLE_QUEENSIDE,
            },
        ],
    };

    for wing in wings {
        if !game_state.castling_rights.contains(wing.right) {
            continue;
        }
        if game_state.occupancy_all & wing.empty_squares != 0 {
            continue;
        }
        if wing
            .transit_squares
            .iter()
            .any(|sq| is_square_attacked(game_state, *sq, enemy))
        {
            continue;
        }

        out.push(encode_move(
            king_from,
            wing.king_target,
            PieceKind::King,
            None,
            None,
            wing.flag,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::Move;
    use crate::game_state::game_state::GameState;
    use crate::moves::move_encoding::{FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE};

    fn king_moves(fen: &str) -> Vec<Move> {
        let state = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&state, &mut out);
        out
    }

    fn castles(moves: &[Move]) -> Vec<Move> {
        moves
            .iter()
            .copied()
            .filter(|m| m & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0)
            .collect()
    }

    #[test]
    fn both_wings_available_on_open_back_rank() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(castles(&moves).len(), 2);
    }

    #[test]
    fn castling_requires_the_right() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
        let castle_moves = castles(&moves);
        assert_eq!(castle_moves.len(), 1);
        assert_ne!(castle_moves[0] & FLAG_CASTLE_QUEENSIDE, 0);
    }

    #[test]
    fn castling_blocked_by_piece_between() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
        let castle_moves = castles(&moves);
        assert_eq!(castle_moves.len(), 1);
        assert_ne!(castle_moves[0] & FLAG_CASTLE_KINGSIDE, 0);
    }

    #[test]
    fn no_castling_out_of_check() {
        let moves = king_moves("r3k2r/8/8/8/8/4r3/8/R3K2R w KQkq - 0 1");
        assert!(castles(&moves).is_empty());
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Black rook on g3 attacks g1; kingside transit is unsafe, queenside fine.
        let moves = king_moves("r3k2r/8/8/8/8/6r1/8/R3K2R w KQkq - 0 1");
        let castle_moves = castles(&moves);
        assert_eq!(castle_moves.len(), 1);
        assert_ne!(castle_moves[0] & FLAG_CASTLE_QUEENSIDE, 0);
    }
}
