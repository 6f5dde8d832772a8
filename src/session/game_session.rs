//! Game session: one board, its history, and the drive loop.
//!
//! A `GameSession` is an explicit value owned by the host (no process-wide
//! state): it holds the current `GameState`, the coordinate-notation record
//! of moves played, and the draw-agreement flag. All mutation goes through
//! `play`/`play_move`/`choose_and_play`/`undo`, each of which leaves the
//! session untouched on failure.

use std::error::Error;
use std::fmt;

use crate::engines::engine_trait::MoveChooser;
use crate::game_state::chess_errors::{IllegalMoveError, ParseError};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenerationError, MoveGenerator};
use crate::session::game_status::{game_status, DrawReason, GameStatus};
use crate::utils::coordinate::{
    format_coordinate_move, matches_coordinate_move, parse_coordinate_move,
};

/// Session-level error. Callers match `Parse` and `Illegal` distinctly: the
/// first means re-prompt for text, the second means the text named a move
/// that is not available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Parse(ParseError),
    Illegal(IllegalMoveError),
    Generation(MoveGenerationError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Parse(e) => write!(f, "{e}"),
            SessionError::Illegal(e) => write!(f, "{e}"),
            SessionError::Generation(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SessionError {}

impl From<ParseError> for SessionError {
    fn from(e: ParseError) -> Self {
        SessionError::Parse(e)
    }
}

impl From<IllegalMoveError> for SessionError {
    fn from(e: IllegalMoveError) -> Self {
        SessionError::Illegal(e)
    }
}

impl From<MoveGenerationError> for SessionError {
    fn from(e: MoveGenerationError) -> Self {
        SessionError::Generation(e)
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    played_moves: Vec<String>,
    draw_agreed: bool,
}

impl GameSession {
    pub fn new_game() -> Self {
        Self {
            state: GameState::new_game(),
            played_moves: Vec::new(),
            draw_agreed: false,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        Ok(Self {
            state: GameState::from_fen(fen)?,
            played_moves: Vec::new(),
            draw_agreed: false,
        })
    }

    /// Start over from the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Immutable snapshot of the current board.
    #[inline]
    pub fn board(&self) -> &GameState {
        &self.state
    }

    /// Coordinate notation of every move played, oldest first.
    #[inline]
    pub fn move_history(&self) -> &[String] {
        &self.played_moves
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, SessionError> {
        Ok(LegalMoveGenerator
            .generate_legal_moves(&self.state)?
            .into_iter()
            .map(|generated| generated.mv)
            .collect())
    }

    /// Play a move given in coordinate notation.
    pub fn play(&mut self, text: &str) -> Result<(), SessionError> {
        let parsed = parse_coordinate_move(text)?;

        let legal = LegalMoveGenerator.generate_legal_moves(&self.state)?;
        let found = legal
            .into_iter()
            .find(|generated| matches_coordinate_move(generated.mv, parsed))
            .ok_or_else(|| IllegalMoveError::NotInLegalSet(text.to_owned()))?;

        self.record(found.mv, found.game_after_move);
        Ok(())
    }

    /// Play an already-encoded move. Validated against the legal set.
    pub fn play_move(&mut self, mv: Move) -> Result<(), SessionError> {
        let next = apply_move(&self.state, mv)?;
        self.record(mv, next);
        Ok(())
    }

    /// Let `chooser` pick from the current legal set and play its choice.
    ///
    /// Returns the coordinate notation of the move played, or `None` when
    /// there is no legal move (the game is over).
    pub fn choose_and_play(
        &mut self,
        chooser: &mut dyn MoveChooser,
    ) -> Result<Option<String>, SessionError> {
        let legal = LegalMoveGenerator.generate_legal_moves(&self.state)?;
        let moves: Vec<Move> = legal.iter().map(|generated| generated.mv).collect();

        let Some(chosen) = chooser.choose_move(&moves) else {
            return Ok(None);
        };

        let found = legal
            .into_iter()
            .find(|generated| generated.mv == chosen)
            .ok_or_else(|| {
                IllegalMoveError::NotInLegalSet(format_coordinate_move(chosen))
            })?;

        let text = format_coordinate_move(found.mv);
        self.record(found.mv, found.game_after_move);
        Ok(Some(text))
    }

    /// Take back the last move. A no-op on a fresh game; rewinding also
    /// withdraws any draw agreement so play can resume.
    pub fn undo(&mut self) {
        if self.played_moves.is_empty() {
            return;
        }
        self.state = undo_move(&self.state);
        self.played_moves.pop();
        self.draw_agreed = false;
    }

    /// Record that both players agreed to a draw.
    pub fn agree_draw(&mut self) {
        self.draw_agreed = true;
    }

    pub fn status(&self) -> Result<GameStatus, SessionError> {
        if self.draw_agreed {
            return Ok(GameStatus::Draw(DrawReason::Agreement));
        }
        Ok(game_status(&self.state)?)
    }

    fn record(&mut self, mv: Move, next: GameState) {
        self.played_moves.push(format_coordinate_move(mv));
        self.state = next;
    }
}
