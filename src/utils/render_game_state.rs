//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! stdio front-end. Rows are printed top to bottom in board order, so the
//! output matches the `(row, col)` coordinates used everywhere else.

use crate::game_state::draughts_rules::BOARD_SIZE;
use crate::game_state::draughts_types::{PieceKind, Player, Square};
use crate::game_state::game_state::Board;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            match board.piece_at(square) {
                Some(piece) => out.push(piece_to_unicode(piece.player, piece.kind)),
                None if square.is_playable() => out.push('·'),
                None => out.push(' '),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(player: Player, kind: PieceKind) -> char {
    match (player, kind) {
        (Player::White, PieceKind::Man) => '⛀',
        (Player::White, PieceKind::King) => '⛁',
        (Player::Black, PieceKind::Man) => '⛂',
        (Player::Black, PieceKind::King) => '⛃',
    }
}
