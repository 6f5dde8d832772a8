use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::attack_tables::knight_attacks;
use crate::moves::move_encoding::{encode_move, FLAG_CAPTURE};

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];

    let mut knights = game_state.pieces[side.index()][PieceKind::Knight.index()];
    while knights != 0 {
        let source = knights.trailing_zeros() as Square;
        knights &= knights - 1;

        let mut targets = knight_attacks(source) & !own_occ;
        while targets != 0 {
            let target = targets.trailing_zeros() as Square;
            targets &= targets - 1;

            if (1u64 << target) & enemy_occ != 0 {
                let captured = game_state.piece_at_for(side.opposite(), target);
                out.push(encode_move(
                    source,
                    target,
                    PieceKind::Knight,
                    captured,
                    None,
                    FLAG_CAPTURE,
                ));
            } else {
                out.push(encode_move(source, target, PieceKind::Knight, None, None, 0));
            }
        }
    }
}
