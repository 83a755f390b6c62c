//! Scoring utilities for the draughts engine.
//!
//! Centralizes piece valuations and sentinel bounds. Positive scores favor
//! White, negative favor Black. The evaluation is material only: no
//! mobility, position, or tempo terms.

use crate::game_state::draughts_types::{Piece, PieceKind, Player, Square};
use crate::game_state::game_state::Board;

/// Numeric representation of an evaluation score.
pub type Score = i32;

/// Lower bound used to seed alpha and the maximizer's running best.
pub const MIN_SCORE: Score = Score::MIN;
/// Upper bound used to seed beta and the minimizer's running best.
pub const MAX_SCORE: Score = Score::MAX;

/// Material value of a single piece, unsigned. Kings are worth three men.
#[inline]
pub fn piece_value(piece: Piece) -> Score {
    match piece.kind {
        PieceKind::Man => 1,
        PieceKind::King => 3,
    }
}

/// Static material count over the whole board: +1 per White man, +3 per
/// White king, -1 per Black man, -3 per Black king.
pub fn material_score(board: &Board) -> Score {
    let mut score = 0;
    for square in Square::all_playable() {
        if let Some(piece) = board.piece_at(square) {
            match piece.player {
                Player::White => score += piece_value(piece),
                Player::Black => score -= piece_value(piece),
            }
        }
    }
    score
}
