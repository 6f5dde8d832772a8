//! Standalone random-vs-random demo game.
//!
//! Run with:
//! `cargo run --bin random_match`
//! `cargo run --bin random_match -- <seed>`
//!
//! Two seeded uniform-random choosers play one bounded game through the
//! session layer, then the move list, final board, status, and PGN export
//! are printed.

use quince_chess::engines::engine_random::RandomChooser;
use quince_chess::game_state::game_state::GameState;
use quince_chess::session::game_session::GameSession;
use quince_chess::utils::pgn::write_pgn;
use quince_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 300;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1234);

    let mut session = GameSession::new_game();
    let mut white = RandomChooser::with_seed(seed);
    let mut black = RandomChooser::with_seed(seed.wrapping_add(1));

    for ply in 0..MAX_PLIES {
        if session.status()?.is_game_over() {
            break;
        }

        let chooser: &mut RandomChooser = if ply % 2 == 0 { &mut white } else { &mut black };
        match session.choose_and_play(chooser)? {
            Some(text) => println!("ply {:>3}: {}", ply + 1, text),
            None => break,
        }
    }

    let status = session.status()?;
    let moves = session.move_history().join(" ");

    println!("\n{}", render_game_state(session.board()));
    println!("\nstatus: {status:?}");
    println!("moves:  {moves}");
    println!("fen:    {}", session.board().get_fen());

    let replayed = replay_moves(session.move_history())?;
    println!("\n{}", write_pgn(&GameState::new_game(), &replayed, status));

    Ok(())
}

/// Re-derive packed moves from the session's coordinate history for PGN
/// export.
fn replay_moves(history: &[String]) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    use quince_chess::move_generation::legal_move_generator::LegalMoveGenerator;
    use quince_chess::move_generation::move_generator::MoveGenerator;
    use quince_chess::utils::coordinate::{matches_coordinate_move, parse_coordinate_move};

    let mut state = GameState::new_game();
    let mut moves = Vec::with_capacity(history.len());

    for text in history {
        let parsed = parse_coordinate_move(text)?;
        let found = LegalMoveGenerator
            .generate_legal_moves(&state)?
            .into_iter()
            .find(|generated| matches_coordinate_move(generated.mv, parsed))
            .ok_or_else(|| format!("history move {text} is not legal on replay"))?;
        moves.push(found.mv);
        state = found.game_after_move;
    }

    Ok(moves)
}
