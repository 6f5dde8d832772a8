//! Move application and reversal.
//!
//! `apply_move` is the only writer of game state. It re-validates against
//! the legal set, so it is safe for hosts to call directly; the generator's
//! self-check filter uses `apply_move_unchecked` on pseudo-legal candidates.
//! Application is all-or-nothing: a failed call leaves the input untouched,
//! and `undo_move(apply_move(s, m)) == s` holds bit for bit.

use crate::game_state::chess_errors::IllegalMoveError;
use crate::game_state::chess_types::{CastlingRights, Color, Move, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::game_state::zobrist::refresh_zobrist_key;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_encoding::{
    move_captured_kind, move_moved_kind, move_promotion_kind, move_source, move_target,
    FLAG_CAPTURE, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE, FLAG_DOUBLE_PAWN_PUSH,
    FLAG_EN_PASSANT,
};
use crate::utils::coordinate::format_coordinate_move;

/// Apply `mv` if and only if it is in the legal set for `game_state`.
pub fn apply_move(game_state: &GameState, mv: Move) -> Result<GameState, IllegalMoveError> {
    let legal = LegalMoveGenerator
        .generate_legal_moves(game_state)
        .map_err(|_| IllegalMoveError::NotInLegalSet(format_coordinate_move(mv)))?;

    legal
        .into_iter()
        .find(|generated| generated.mv == mv)
        .map(|generated| generated.game_after_move)
        .ok_or_else(|| IllegalMoveError::NotInLegalSet(format_coordinate_move(mv)))
}

/// Apply a pseudo-legal move without the legality membership check.
///
/// The result may leave the mover's own king attacked; the generator filters
/// such successors out. All bookkeeping (rights, clocks, hashes, history) is
/// still performed so surviving successors are complete states.
pub fn apply_move_unchecked(
    game_state: &GameState,
    mv: Move,
) -> Result<GameState, IllegalMoveError> {
    let source = move_source(mv);
    let target = move_target(mv);
    let source_mask = 1u64 << source;
    let target_mask = 1u64 << target;

    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let moved = move_moved_kind(mv);

    match game_state.piece_at(source) {
        None => return Err(IllegalMoveError::EmptySourceSquare(source)),
        Some((color, _)) if color != side => {
            return Err(IllegalMoveError::NotSideToMove(source));
        }
        Some(_) => {}
    }

    let mut next = game_state.clone();

    next.undo_stack.push(UndoState {
        mv,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_zobrist_key: game_state.zobrist_key,
    });

    // Lift the moved piece off its source square.
    next.pieces[side.index()][moved.index()] &= !source_mask;

    // Remove the captured piece. En-passant removes the bypassed pawn, one
    // rank behind the landing square, not the landing square itself.
    if mv & FLAG_EN_PASSANT != 0 {
        let captured_square = en_passant_victim_square(side, target)
            .ok_or_else(|| IllegalMoveError::NotInLegalSet(format_coordinate_move(mv)))?;
        next.pieces[enemy.index()][PieceKind::Pawn.index()] &= !(1u64 << captured_square);
    } else if mv & FLAG_CAPTURE != 0 {
        if let Some(captured) = move_captured_kind(mv) {
            next.pieces[enemy.index()][captured.index()] &= !target_mask;
        }
    }

    // Land the moved (or promoted) piece.
    let landed = move_promotion_kind(mv).unwrap_or(moved);
    next.pieces[side.index()][landed.index()] |= target_mask;

    // Castling carries the rook along.
    if mv & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0 {
        let (rook_from, rook_to) = castling_rook_squares(side, mv);
        let rooks = &mut next.pieces[side.index()][PieceKind::Rook.index()];
        *rooks &= !(1u64 << rook_from);
        *rooks |= 1u64 << rook_to;
    }

    next.castling_rights = revoke_castling_rights(next.castling_rights, side, moved, source, target);

    next.en_passant_square = if mv & FLAG_DOUBLE_PAWN_PUSH != 0 {
        Some((source + target) / 2)
    } else {
        None
    };

    if moved == PieceKind::Pawn || mv & FLAG_CAPTURE != 0 {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if side == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy;
    next.recalc_occupancy();
    refresh_zobrist_key(&mut next);
    next.repetition_history.push(next.zobrist_key);

    Ok(next)
}

/// Reverse the most recently applied move, restoring every field exactly.
///
/// With an empty history this is a no-op returning an identical state; undo
/// is never an error.
pub fn undo_move(game_state: &GameState) -> GameState {
    let mut prev = game_state.clone();
    let Some(undo) = prev.undo_stack.pop() else {
        return prev;
    };

    let mv = undo.mv;
    let source = move_source(mv);
    let target = move_target(mv);
    let target_mask = 1u64 << target;

    // The side that played the move being reversed.
    let mover = game_state.side_to_move.opposite();
    let enemy = game_state.side_to_move;
    let moved = move_moved_kind(mv);

    // Take the piece back off the landing square; a promotion dissolves back
    // into the pawn it came from.
    let landed = move_promotion_kind(mv).unwrap_or(moved);
    prev.pieces[mover.index()][landed.index()] &= !target_mask;
    prev.pieces[mover.index()][moved.index()] |= 1u64 << source;

    // Put back whatever was captured.
    if mv & FLAG_EN_PASSANT != 0 {
        // Applied moves always have an on-board victim square.
        if let Some(captured_square) = en_passant_victim_square(mover, target) {
            prev.pieces[enemy.index()][PieceKind::Pawn.index()] |= 1u64 << captured_square;
        }
    } else if mv & FLAG_CAPTURE != 0 {
        if let Some(captured) = move_captured_kind(mv) {
            prev.pieces[enemy.index()][captured.index()] |= target_mask;
        }
    }

    // Walk the castling rook home.
    if mv & (FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE) != 0 {
        let (rook_from, rook_to) = castling_rook_squares(mover, mv);
        let rooks = &mut prev.pieces[mover.index()][PieceKind::Rook.index()];
        *rooks &= !(1u64 << rook_to);
        *rooks |= 1u64 << rook_from;
    }

    prev.castling_rights = undo.prev_castling_rights;
    prev.en_passant_square = undo.prev_en_passant_square;
    prev.halfmove_clock = undo.prev_halfmove_clock;
    if mover == Color::Black {
        prev.fullmove_number = prev.fullmove_number.saturating_sub(1);
    }

    prev.side_to_move = mover;
    prev.recalc_occupancy();
    prev.zobrist_key = undo.prev_zobrist_key;
    prev.repetition_history.pop();

    prev
}

/// Square of the pawn removed by an en-passant capture landing on `target`.
///
/// `None` when the landing square has no rank behind it, which only a
/// hand-forged move description can produce.
#[inline]
fn en_passant_victim_square(capturing_side: Color, target: Square) -> Option<Square> {
    match capturing_side {
        Color::White => target.checked_sub(8),
        Color::Black => {
            let square = target + 8;
            (square < 64).then_some(square)
        }
    }
}

#[inline]
fn castling_rook_squares(side: Color, mv: Move) -> (Square, Square) {
    let kingside = mv & FLAG_CASTLE_KINGSIDE != 0;
    match (side, kingside) {
        (Color::White, true) => (7, 5),
        (Color::White, false) => (0, 3),
        (Color::Black, true) => (63, 61),
        (Color::Black, false) => (56, 59),
    }
}

fn revoke_castling_rights(
    rights: CastlingRights,
    side: Color,
    moved: PieceKind,
    source: Square,
    target: Square,
) -> CastlingRights {
    let mut rights = rights;

    if moved == PieceKind::King {
        rights = rights.without(match side {
            Color::White => CastlingRights::WHITE_BOTH,
            Color::Black => CastlingRights::BLACK_BOTH,
        });
    }

    if moved == PieceKind::Rook {
        rights = rights.without(corner_right(source));
    }

    // Capturing a rook on its home corner also kills that wing for good.
    rights.without(corner_right(target))
}

#[inline]
fn corner_right(square: Square) -> CastlingRights {
    match square {
        0 => CastlingRights::WHITE_QUEENSIDE,
        7 => CastlingRights::WHITE_KINGSIDE,
        56 => CastlingRights::BLACK_QUEENSIDE,
        63 => CastlingRights::BLACK_KINGSIDE,
        _ => CastlingRights::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, undo_move};
    use crate::game_state::chess_errors::IllegalMoveError;
    use crate::game_state::chess_types::{CastlingRights, Color, Move};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::coordinate::format_coordinate_move;

    fn find_move(state: &GameState, text: &str) -> Move {
        LegalMoveGenerator
            .generate_legal_moves(state)
            .expect("generation should succeed")
            .into_iter()
            .map(|generated| generated.mv)
            .find(|mv| format_coordinate_move(*mv) == text)
            .unwrap_or_else(|| panic!("move {text} should be legal"))
    }

    fn play(state: &GameState, text: &str) -> GameState {
        apply_move(state, find_move(state, text)).expect("move should apply")
    }

    #[test]
    fn double_push_sets_en_passant_target_and_next_move_clears_it() {
        let start = GameState::new_game();
        let after_e4 = play(&start, "e2e4");
        assert_eq!(
            after_e4.en_passant_square,
            Some(algebraic_to_square("e3").expect("square should parse"))
        );

        let after_nf6 = play(&after_e4, "g8f6");
        assert_eq!(after_nf6.en_passant_square, None);
    }

    #[test]
    fn apply_then_undo_restores_the_exact_state() {
        let start = GameState::new_game();
        for text in ["e2e4", "b1c3", "e1g1"] {
            let state = match text {
                "e2e4" => start.clone(),
                "b1c3" => start.clone(),
                // Castle-ready position.
                _ => GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
                    .expect("FEN should parse"),
            };
            let next = play(&state, text);
            assert_eq!(undo_move(&next), state, "undo should reverse {text}");
        }
    }

    #[test]
    fn undo_round_trips_en_passant_and_promotion() {
        let ep_state =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("FEN should parse");
        let after_capture = play(&ep_state, "e5d6");
        // The bypassed pawn is removed from d5, not d6.
        assert_eq!(after_capture.piece_at(algebraic_to_square("d5").unwrap()), None);
        assert_eq!(undo_move(&after_capture), ep_state);

        let promo_state =
            GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 4 9").expect("FEN should parse");
        let after_promo = play(&promo_state, "a7a8q");
        assert_eq!(undo_move(&after_promo), promo_state);
    }

    #[test]
    fn undo_with_empty_history_is_a_no_op() {
        let start = GameState::new_game();
        let same = undo_move(&start);
        assert_eq!(same, start);
        assert!(same.undo_stack.is_empty());
    }

    #[test]
    fn rook_moves_and_rook_captures_revoke_rights() {
        let state =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        let after_rook_move = play(&state, "h1h4");
        assert!(!after_rook_move
            .castling_rights
            .contains(CastlingRights::WHITE_KINGSIDE));
        assert!(after_rook_move
            .castling_rights
            .contains(CastlingRights::WHITE_QUEENSIDE));

        let after_rook_trade = play(&state, "a1a8");
        assert!(!after_rook_trade
            .castling_rights
            .contains(CastlingRights::WHITE_QUEENSIDE));
        assert!(!after_rook_trade
            .castling_rights
            .contains(CastlingRights::BLACK_QUEENSIDE));

        // Undo restores the full rights; this is the only path that does.
        assert_eq!(undo_move(&after_rook_trade).castling_rights, CastlingRights::ALL);
    }

    #[test]
    fn castling_moves_both_king_and_rook() {
        let state =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castled = play(&state, "e1g1");

        let g1 = algebraic_to_square("g1").unwrap();
        let f1 = algebraic_to_square("f1").unwrap();
        assert_eq!(
            castled.piece_at(g1).map(|(color, _)| color),
            Some(Color::White)
        );
        assert!(castled.piece_at(f1).is_some());
        assert_eq!(castled.piece_at(algebraic_to_square("h1").unwrap()), None);
        assert!(castled.castling_rights.contains(CastlingRights::BLACK_BOTH));
        assert!(!castled.castling_rights.contains(CastlingRights::WHITE_KINGSIDE));
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_moves_and_captures_only() {
        let state =
            GameState::from_fen("4k3/8/8/3p4/4P3/8/8/R3K3 w - - 7 20").expect("FEN should parse");

        let quiet = play(&state, "a1a4");
        assert_eq!(quiet.halfmove_clock, 8);

        let pawn_capture = play(&state, "e4d5");
        assert_eq!(pawn_capture.halfmove_clock, 0);
    }

    #[test]
    fn fullmove_number_increments_after_black_only() {
        let start = GameState::new_game();
        let after_white = play(&start, "e2e4");
        assert_eq!(after_white.fullmove_number, 1);
        let after_black = play(&after_white, "e7e5");
        assert_eq!(after_black.fullmove_number, 2);
    }

    #[test]
    fn illegal_move_is_rejected_and_state_untouched() {
        let start = GameState::new_game();
        // Corrupt the target square so the move falls outside the legal set.
        let mv = find_move(&start, "e2e4") ^ (1 << 6);
        let result = apply_move(&start, mv);
        assert!(matches!(result, Err(IllegalMoveError::NotInLegalSet(_))));
        assert_eq!(start, GameState::new_game());
    }
}
