//! Pure move application.
//!
//! Produces a fresh board reflecting a move's effects. Callers must
//! validate moves first (generator output or an `is_legal` pass); the
//! result for an arbitrary unchecked move is unspecified.

use crate::game_state::draughts_rules::promotion_row;
use crate::game_state::draughts_types::{Move, Piece, PieceKind};
use crate::game_state::game_state::Board;

/// Apply `mv` to `board`, returning the resulting board.
///
/// Relocates the occupant, clears the start and every captured square, then
/// promotes a man that reached the far row. The promotion check runs after
/// relocation, against the destination row.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();

    let Some(piece) = next.piece_at(mv.from) else {
        return next;
    };

    next.clear_square(mv.from);
    for captured in &mv.captured {
        next.clear_square(*captured);
    }

    let landed = if piece.kind == PieceKind::Man && mv.to.row == promotion_row(piece.player) {
        Piece::king(piece.player)
    } else {
        piece
    };
    next.place_piece(mv.to, landed);

    next
}
