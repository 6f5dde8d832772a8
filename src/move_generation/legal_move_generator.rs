//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, hypothetically applies
//! each candidate, and keeps only those whose successor leaves the mover's
//! king unattacked. Pins and check evasion fall out of that single filter;
//! there is no separate pin pass. Output order follows the bitboard scan and
//! is stable for a given position.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut pseudo = Vec::<Move>::with_capacity(64);

        generate_pawn_moves(game_state, &mut pseudo);
        generate_knight_moves(game_state, &mut pseudo);
        generate_bishop_moves(game_state, &mut pseudo);
        generate_rook_moves(game_state, &mut pseudo);
        generate_queen_moves(game_state, &mut pseudo);
        generate_king_moves(game_state, &mut pseudo);

        let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
        for mv in pseudo {
            let next = apply_move_unchecked(game_state, mv)
                .map_err(|e| MoveGenerationError::InvalidState(format!("apply failed: {e}")))?;

            // Illegal if the mover's own king is attacked afterwards.
            if is_king_in_check(&next, game_state.side_to_move) {
                continue;
            }

            legal.push(GeneratedMove {
                mv,
                game_after_move: next,
            });
        }

        Ok(legal)
    }
}
