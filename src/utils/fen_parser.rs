//! FEN-to-GameState parser.
//!
//! Builds a fully populated state from a Forsyth-Edwards Notation string:
//! piece bitboards, rights, clocks, occupancy caches, and the position key
//! seeding the repetition history. Failures are reported as `ParseError`
//! values naming the offending field or character.

use crate::game_state::chess_errors::ParseError;
use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::zobrist::refresh_zobrist_key;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ParseError> {
    let mut fields = fen.split_whitespace();

    let placement = fields.next().ok_or(ParseError::MissingFenField("placement"))?;
    let side = fields.next().ok_or(ParseError::MissingFenField("side to move"))?;
    let castling = fields.next().ok_or(ParseError::MissingFenField("castling rights"))?;
    let en_passant = fields.next().ok_or(ParseError::MissingFenField("en-passant target"))?;
    let halfmove = fields.next().ok_or(ParseError::MissingFenField("halfmove clock"))?;
    let fullmove = fields.next().ok_or(ParseError::MissingFenField("fullmove number"))?;

    if fields.next().is_some() {
        return Err(ParseError::ExtraFenField);
    }

    let mut game_state = GameState::new_empty();

    parse_placement(placement, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side)?;
    game_state.castling_rights = parse_castling_rights(castling)?;
    game_state.en_passant_square = parse_en_passant_target(en_passant)?;
    game_state.halfmove_clock = parse_clock(halfmove)?;
    game_state.fullmove_number = parse_clock(fullmove)?;

    game_state.recalc_occupancy();
    refresh_zobrist_key(&mut game_state);
    game_state.repetition_history.push(game_state.zobrist_key);

    Ok(game_state)
}

fn parse_placement(placement: &str, game_state: &mut GameState) -> Result<(), ParseError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::InvalidRankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_text) in ranks.iter().enumerate() {
        // FEN lists rank 8 first.
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_text.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ParseError::InvalidPieceChar(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ParseError::InvalidFileCount((*rank_text).to_owned()));
                }
                continue;
            }

            let (color, kind) =
                piece_from_fen_char(ch).ok_or(ParseError::InvalidPieceChar(ch))?;

            if file >= 8 {
                return Err(ParseError::InvalidFileCount((*rank_text).to_owned()));
            }

            let square = board_rank * 8 + file;
            game_state.pieces[color.index()][kind.index()] |= 1u64 << square;
            file += 1;
        }

        if file != 8 {
            return Err(ParseError::InvalidFileCount((*rank_text).to_owned()));
        }
    }

    Ok(())
}

fn parse_side_to_move(side: &str) -> Result<Color, ParseError> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ParseError::InvalidSideToMove(side.to_owned())),
    }
}

fn parse_castling_rights(castling: &str) -> Result<CastlingRights, ParseError> {
    if castling == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling.chars() {
        rights = rights.with(match ch {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            _ => return Err(ParseError::InvalidCastlingChar(ch)),
        });
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant: &str) -> Result<Option<Square>, ParseError> {
    if en_passant == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant)?))
}

fn parse_clock(field: &str) -> Result<u16, ParseError> {
    field
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidClockField(field.to_owned()))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
