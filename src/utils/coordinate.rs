//! Coordinate move notation (`e2e4`, `e7e8q`).
//!
//! Parsing is context-free: it checks shape only (square tokens plus an
//! optional promotion letter) and never consults a board. Whether the parsed
//! triple names a legal move is decided against the generated legal set,
//! which keeps malformed-text errors (`ParseError`) cleanly separated from
//! illegal-move errors.

use crate::game_state::chess_errors::ParseError;
use crate::game_state::chess_types::{Move, PieceKind, Square};
use crate::moves::move_encoding::{move_promotion_kind, move_source, move_target};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parsed coordinate move: source, target, optional promotion kind.
pub type CoordinateMove = (Square, Square, Option<PieceKind>);

pub fn parse_coordinate_move(text: &str) -> Result<CoordinateMove, ParseError> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ParseError::InvalidMoveLength(text.to_owned()));
    }

    let source = algebraic_to_square(&text[0..2])?;
    let target = algebraic_to_square(&text[2..4])?;

    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(letter) => Some(promotion_from_letter(*letter as char)?),
    };

    Ok((source, target, promotion))
}

/// Render a packed move in coordinate notation.
pub fn format_coordinate_move(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(move_source(mv)));
    out.push_str(&square_to_algebraic(move_target(mv)));
    if let Some(promotion) = move_promotion_kind(mv) {
        out.push(promotion_to_letter(promotion));
    }
    out
}

/// True when `mv` realizes the parsed coordinate triple.
#[inline]
pub fn matches_coordinate_move(mv: Move, parsed: CoordinateMove) -> bool {
    let (source, target, promotion) = parsed;
    move_source(mv) == source && move_target(mv) == target && move_promotion_kind(mv) == promotion
}

fn promotion_from_letter(letter: char) -> Result<PieceKind, ParseError> {
    match letter.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ParseError::InvalidPromotionChar(letter)),
    }
}

fn promotion_to_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        // Non-promotion kinds never appear in the promotion field.
        _ => '?',
    }
}

#[cfg(test)]
mod tests {
    use super::{format_coordinate_move, matches_coordinate_move, parse_coordinate_move};
    use crate::game_state::chess_errors::ParseError;
    use crate::game_state::chess_types::PieceKind;
    use crate::moves::move_encoding::encode_move;

    #[test]
    fn parses_plain_and_promotion_moves() {
        assert_eq!(
            parse_coordinate_move("e2e4").expect("e2e4 should parse"),
            (12, 28, None)
        );
        assert_eq!(
            parse_coordinate_move("e7e8q").expect("e7e8q should parse"),
            (52, 60, Some(PieceKind::Queen))
        );
    }

    #[test]
    fn rejects_malformed_move_text() {
        assert!(matches!(
            parse_coordinate_move("e2"),
            Err(ParseError::InvalidMoveLength(_))
        ));
        assert!(matches!(
            parse_coordinate_move("e2e4qq"),
            Err(ParseError::InvalidMoveLength(_))
        ));
        assert!(matches!(
            parse_coordinate_move("i2e4"),
            Err(ParseError::InvalidSquare(_))
        ));
        assert!(matches!(
            parse_coordinate_move("e2e9"),
            Err(ParseError::InvalidSquare(_))
        ));
        assert!(matches!(
            parse_coordinate_move("e7e8k"),
            Err(ParseError::InvalidPromotionChar('k'))
        ));
    }

    #[test]
    fn format_round_trips_through_parse() {
        let mv = encode_move(52, 60, PieceKind::Pawn, None, Some(PieceKind::Knight), 0);
        let text = format_coordinate_move(mv);
        assert_eq!(text, "e7e8n");
        let parsed = parse_coordinate_move(&text).expect("formatted move should parse");
        assert!(matches_coordinate_move(mv, parsed));
    }
}
