//! Typed errors surfaced to engine callers.
//!
//! `ParseError` covers malformed text (moves, FEN fields) and is always
//! recoverable: the game state is untouched when it is returned. Likewise
//! `IllegalMoveError` reports a well-formed move that is not legal on the
//! current board. Neither error is ever fatal; callers match on the variant
//! to present diagnostics or retry input.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

/// Malformed move or FEN text. The offending token is carried for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A square token was not a file letter `a..h` followed by a rank `1..8`.
    InvalidSquare(String),
    /// A coordinate move was not 4 or 5 characters long.
    InvalidMoveLength(String),
    /// The trailing promotion letter was not one of `n`, `b`, `r`, `q`.
    InvalidPromotionChar(char),
    /// A required FEN field was absent. Payload names the field.
    MissingFenField(&'static str),
    /// The FEN string had fields after the fullmove number.
    ExtraFenField,
    /// The placement field did not contain exactly 8 ranks.
    InvalidRankCount(usize),
    /// One placement rank did not sum to 8 files.
    InvalidFileCount(String),
    /// An unknown character appeared in the placement field.
    InvalidPieceChar(char),
    /// The side-to-move field was not `w` or `b`.
    InvalidSideToMove(String),
    /// An unknown character appeared in the castling-rights field.
    InvalidCastlingChar(char),
    /// A clock field was not a non-negative integer.
    InvalidClockField(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSquare(token) => write!(f, "invalid square: {token}"),
            ParseError::InvalidMoveLength(token) => {
                write!(f, "coordinate move must be 4 or 5 characters: {token}")
            }
            ParseError::InvalidPromotionChar(ch) => {
                write!(f, "invalid promotion letter: {ch}")
            }
            ParseError::MissingFenField(field) => write!(f, "missing FEN field: {field}"),
            ParseError::ExtraFenField => write!(f, "FEN has extra trailing fields"),
            ParseError::InvalidRankCount(count) => {
                write!(f, "FEN placement must contain 8 ranks, found {count}")
            }
            ParseError::InvalidFileCount(rank) => {
                write!(f, "FEN rank does not sum to 8 files: {rank}")
            }
            ParseError::InvalidPieceChar(ch) => {
                write!(f, "invalid piece character in FEN placement: {ch}")
            }
            ParseError::InvalidSideToMove(token) => {
                write!(f, "invalid side-to-move field: {token}")
            }
            ParseError::InvalidCastlingChar(ch) => {
                write!(f, "invalid castling-rights character: {ch}")
            }
            ParseError::InvalidClockField(token) => write!(f, "invalid clock field: {token}"),
        }
    }
}

impl Error for ParseError {}

/// A well-formed move that is not playable on the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// The source square holds no piece.
    EmptySourceSquare(Square),
    /// The source square holds a piece of the side not on move.
    NotSideToMove(Square),
    /// The move is not in the legal set for the current position. Payload is
    /// the coordinate rendering of the attempted move.
    NotInLegalSet(String),
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::EmptySourceSquare(square) => {
                write!(f, "no piece on source square index {square}")
            }
            IllegalMoveError::NotSideToMove(square) => {
                write!(f, "piece on square index {square} is not on move")
            }
            IllegalMoveError::NotInLegalSet(text) => write!(f, "illegal move: {text}"),
        }
    }
}

impl Error for IllegalMoveError {}
