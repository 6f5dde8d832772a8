//! Terminal-state evaluation.
//!
//! `game_status` reads a board (never mutates it) and reports whether the
//! game is over. Checkmate and stalemate derive from the legal move count;
//! the draw rules read the clocks and the repetition history. Draw by
//! agreement cannot be detected from the board and is recorded by the
//! session layer instead.

use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVE_LIMIT, THREEFOLD_REPETITION_COUNT};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
    Agreement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw(DrawReason),
}

impl GameStatus {
    #[inline]
    pub fn is_game_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

pub fn game_status(game_state: &GameState) -> MoveGenResult<GameStatus> {
    let legal = LegalMoveGenerator.generate_legal_moves(game_state)?;

    if legal.is_empty() {
        if is_king_in_check(game_state, game_state.side_to_move) {
            return Ok(match game_state.side_to_move {
                Color::White => GameStatus::BlackWins,
                Color::Black => GameStatus::WhiteWins,
            });
        }
        return Ok(GameStatus::Draw(DrawReason::Stalemate));
    }

    if is_insufficient_material(game_state) {
        return Ok(GameStatus::Draw(DrawReason::InsufficientMaterial));
    }

    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        return Ok(GameStatus::Draw(DrawReason::FiftyMoveRule));
    }

    if game_state.repetition_count() >= THREEFOLD_REPETITION_COUNT {
        return Ok(GameStatus::Draw(DrawReason::ThreefoldRepetition));
    }

    Ok(GameStatus::Ongoing)
}

/// Dead position: bare kings, or one lone minor piece on the whole board.
///
/// Two-minor endings (for example king and bishop each) are reported as
/// ongoing even though most are unwinnable in practice.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut minors = 0u32;

    for color in [Color::White, Color::Black] {
        let side = &game_state.pieces[color.index()];

        let heavy = side[PieceKind::Pawn.index()]
            | side[PieceKind::Rook.index()]
            | side[PieceKind::Queen.index()];
        if heavy != 0 {
            return false;
        }

        minors += (side[PieceKind::Knight.index()] | side[PieceKind::Bishop.index()]).count_ones();
    }

    minors <= 1
}
