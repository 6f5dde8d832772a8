use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

/// Serialize a state to FEN. Round-trips exactly with `parse_fen`.
pub fn generate_fen(game_state: &GameState) -> String {
    let placement = generate_placement_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "-".to_owned(), square_to_algebraic);

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_placement_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            let square: Square = rank * 8 + file;
            match game_state.piece_at(square) {
                Some((color, kind)) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(color, kind));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let letter = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    if rights.is_empty() {
        return "-".to_owned();
    }

    let mut out = String::new();
    for (right, letter) in [
        (CastlingRights::WHITE_KINGSIDE, 'K'),
        (CastlingRights::WHITE_QUEENSIDE, 'Q'),
        (CastlingRights::BLACK_KINGSIDE, 'k'),
        (CastlingRights::BLACK_QUEENSIDE, 'q'),
    ] {
        if rights.contains(right) {
            out.push(letter);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_round_trips() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(generate_fen(&parsed), STARTING_POSITION_FEN);
    }

    #[test]
    fn varied_positions_round_trip_exactly() {
        // Covers en-passant targets, partial and absent rights, both sides to
        // move, promotions pending, sparse and crowded boards, and clocks.
        let fens = [
            STARTING_POSITION_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "rnbqkbnr/ppp1pppp/8/8/3pP3/5N2/PPPP1PPP/RNBQKB1R b KQkq e3 0 2",
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3",
            "8/P7/8/8/8/8/k6K/8 w - - 12 70",
            "4k3/8/8/8/8/8/8/R3K3 w Q - 99 54",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
        ];

        for fen in fens {
            let parsed = parse_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&parsed), fen, "round trip failed for {fen}");

            let reparsed = parse_fen(&generate_fen(&parsed)).expect("generated FEN should parse");
            assert_eq!(reparsed, parsed);
        }
    }
}
