//! PGN export for game-history interchange.
//!
//! Serializes an initial position and the moves played from it to PGN text.
//! Movetext uses coordinate notation, which PGN readers accept as an import
//! format and which keeps the writer independent of disambiguation rules.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;
use crate::session::game_status::GameStatus;
use crate::utils::coordinate::format_coordinate_move;

pub fn write_pgn(initial_state: &GameState, moves: &[Move], status: GameStatus) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_tag(status).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(moves, &headers)
}

pub fn write_pgn_with_headers(moves: &[Move], headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext = Vec::<String>::with_capacity(moves.len() + 1);
    for (ply, mv) in moves.iter().enumerate() {
        let text = format_coordinate_move(*mv);
        if ply % 2 == 0 {
            movetext.push(format!("{}. {}", ply / 2 + 1, text));
        } else {
            movetext.push(text);
        }
    }

    let result = headers.get("Result").map_or("*", String::as_str);
    movetext.push(result.to_owned());
    out.push_str(&movetext.join(" "));
    out.push('\n');

    out
}

/// PGN result tag for a status. Unfinished games are `*`.
pub fn result_tag(status: GameStatus) -> &'static str {
    match status {
        GameStatus::WhiteWins => "1-0",
        GameStatus::BlackWins => "0-1",
        GameStatus::Draw(_) => "1/2-1/2",
        GameStatus::Ongoing => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
