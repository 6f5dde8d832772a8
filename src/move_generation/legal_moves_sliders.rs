//! Pseudo-legal generation for the sliding pieces.
//!
//! Bishop, rook, and queen share one loop parameterized by the attack
//! function; rays already stop at the first occupied square, so the only
//! remaining work is classifying the landing square.

use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use crate::moves::move_encoding::{encode_move, FLAG_CAPTURE};

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_slider_moves(game_state, PieceKind::Bishop, bishop_attacks, out);
}

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_slider_moves(game_state, PieceKind::Rook, rook_attacks, out);
}

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<Move>) {
    generate_slider_moves(game_state, PieceKind::Queen, queen_attacks, out);
}

fn generate_slider_moves(
    game_state: &GameState,
    kind: PieceKind,
    attacks: fn(Square, u64) -> u64,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy_by_color[side.index()];
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];

    let mut sliders = game_state.pieces[side.index()][kind.index()];
    while sliders != 0 {
        let source = sliders.trailing_zeros() as Square;
        sliders &= sliders - 1;

        let mut targets = attacks(source, game_state.occupancy_all) & !own_occ;
        while targets != 0 {
            let target = targets.trailing_zeros() as Square;
            targets &= targets - 1;

            if (1u64 << target) & enemy_occ != 0 {
                let captured = game_state.piece_at_for(side.opposite(), target);
                out.push(encode_move(source, target, kind, captured, None, FLAG_CAPTURE));
            } else {
                out.push(encode_move(source, target, kind, None, None, 0));
            }
        }
    }
}
