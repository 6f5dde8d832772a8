//! Terminal-oriented board renderer.
//!
//! The display collaborator: consumes an immutable board snapshot and
//! produces a Unicode diagram plus a side-to-move trailer. Core types never
//! format themselves for display.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
///
/// Rank 8 prints first; `a1` is the bottom-left corner.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square: Square = rank * 8 + file;
            match game_state.piece_at(square) {
                Some((color, kind)) => out.push(piece_glyph(color, kind)),
                None => out.push('·'),
            }
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out.push_str(match game_state.side_to_move {
        Color::White => "White to move",
        Color::Black => "Black to move",
    });

    out
}

fn piece_glyph(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_renders_all_pieces() {
        let rendered = render_game_state(&GameState::new_game());

        assert!(rendered.starts_with("  a b c d e f g h\n8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8"));
        assert!(rendered.ends_with("White to move"));
        assert_eq!(rendered.matches('♙').count(), 8);
        assert_eq!(rendered.matches('♟').count(), 8);
        assert_eq!(rendered.lines().count(), 11);
    }
}
