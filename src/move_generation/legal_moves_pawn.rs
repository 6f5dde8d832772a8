use crate::game_state::chess_types::{Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_encoding::{
    encode_move, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let empty = !game_state.occupancy_all;

    let (forward, start_rank, promotion_rank): (i8, u8, u8) = match side {
        Color::White => (8, 1, 7),
        Color::Black => (-8, 6, 0),
    };

    let mut pawns = game_state.pieces[side.index()][PieceKind::Pawn.index()];
    while pawns != 0 {
        let source = pawns.trailing_zeros() as Square;
        pawns &= pawns - 1;

        let file = source % 8;
        let rank = source / 8;

        // A pawn standing on its promotion rank is a corrupt position; skip
        // rather than step off the board.
        if rank == promotion_rank {
            continue;
        }

        // Single push, double push, and push-promotions.
        let one_step = (source as i8 + forward) as Square;
        if (1u64 << one_step) & empty != 0 {
            if one_step / 8 == promotion_rank {
                for promo in PieceKind::PROMOTIONS {
                    out.push(encode_move(source, one_step, PieceKind::Pawn, None, Some(promo), 0));
                }
            } else {
                out.push(encode_move(source, one_step, PieceKind::Pawn, None, None, 0));

                if rank == start_rank {
                    let two_step = (source as i8 + 2 * forward) as Square;
                    if (1u64 << two_step) & empty != 0 {
                        out.push(encode_move(
                            source,
                            two_step,
                            PieceKind::Pawn,
                            None,
                            None,
                            FLAG_DOUBLE_PAWN_PUSH,
                        ));
                    }
                }
            }
        }

        // Diagonal captures, capture-promotions, and en-passant.
        for file_delta in [-1i8, 1i8] {
            let target_file = file as i8 + file_delta;
            if !(0..=7).contains(&target_file) {
                continue;
            }

            let target = (source as i8 + forward + file_delta) as Square;
            let target_mask = 1u64 << target;

            if target_mask & enemy_occ != 0 {
                let captured = game_state.piece_at_for(side.opposite(), target);
                if target / 8 == promotion_rank {
                    for promo in PieceKind::PROMOTIONS {
                        out.push(encode_move(
                            source,
                            target,
                            PieceKind::Pawn,
                            captured,
                            Some(promo),
                            FLAG_CAPTURE,
                        ));
                    }
                } else {
                    out.push(encode_move(
                        source,
                        target,
                        PieceKind::Pawn,
                        captured,
                        None,
                        FLAG_CAPTURE,
                    ));
                }
            } else if game_state.en_passant_square == Some(target) {
                out.push(encode_move(
                    source,
                    target,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    FLAG_CAPTURE | FLAG_EN_PASSANT,
                ));
            }
        }
    }
}
