//! Crate root module declarations for the Quince chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, attack tables and
//! move encoding, move generation, session/status layer, choosers, and
//! notation utilities) so binaries, tests, and host applications can import
//! stable module paths.

pub mod game_state {
    pub mod chess_errors;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
    pub mod zobrist;
}

pub mod moves {
    pub mod attack_tables;
    pub mod move_encoding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod perft;
}

pub mod session {
    pub mod game_session;
    pub mod game_status;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod coordinate;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_game_state;
}
