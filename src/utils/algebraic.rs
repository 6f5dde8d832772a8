//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (for example `e4`) and the
//! internal square index, reused by the FEN, coordinate-move, and PGN
//! components.

use crate::game_state::chess_errors::ParseError;
use crate::game_state::chess_types::Square;

/// Convert an algebraic coordinate (for example `e4`) to a square index.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, ParseError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ParseError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ParseError::InvalidSquare(text.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to its algebraic coordinate.
///
/// Square indices produced by this crate are always in range, so this is
/// infallible; out-of-range input saturates into the h8 corner.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let square = square.min(63);
    let file = char::from(b'a' + square % 8);
    let rank = char::from(b'1' + square / 8);
    format!("{file}{rank}")
}
