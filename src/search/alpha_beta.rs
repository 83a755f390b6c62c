//! Minimax search with alpha-beta pruning.
//!
//! A plain recursive depth-first traversal over the move generator,
//! applier, and material evaluation. Every recursive call owns its board
//! value and returns a scalar, so exploring an exponential number of
//! hypothetical boards needs no shared state. Search runs to `max_depth`
//! or move exhaustion; there is no timeout and no move ordering beyond the
//! generator's natural square-then-direction sweep.

use crate::game_state::draughts_types::{Move, Player};
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{material_score, Score, MAX_SCORE, MIN_SCORE};

/// Evaluate `board` to `max_depth` plies. White moves on maximizing calls,
/// Black on minimizing ones.
///
/// Returns the static material score when the depth limit is reached or
/// the side to move has no legal reply; an empty-move terminal is scored
/// by material alone, the same as a quiet position at the horizon.
pub fn alpha_beta(
    board: &Board,
    depth: u8,
    max_depth: u8,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    let current_player = if maximizing {
        Player::White
    } else {
        Player::Black
    };
    let moves = legal_moves(board, current_player);

    if depth == max_depth || moves.is_empty() {
        return material_score(board);
    }

    if maximizing {
        let mut best = MIN_SCORE;
        for mv in &moves {
            let next = apply_move(board, mv);
            let value = alpha_beta(&next, depth + 1, max_depth, false, alpha, beta);
            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = MAX_SCORE;
        for mv in &moves {
            let next = apply_move(board, mv);
            let value = alpha_beta(&next, depth + 1, max_depth, true, alpha, beta);
            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Pick the automated side's (White's) best move by searching each root
/// candidate to `max_depth`.
///
/// The root mirrors the maximizing branch: after every child the running
/// alpha is raised, and only a strictly greater value replaces the current
/// best, so the first of equal candidates wins. Returns `None` when White
/// has no legal move; callers must check before applying.
pub fn find_best_move(board: &Board, max_depth: u8) -> Option<Move> {
    let mut best_value = MIN_SCORE;
    let mut best_move: Option<Move> = None;
    let mut alpha = MIN_SCORE;
    let beta = MAX_SCORE;

    for mv in legal_moves(board, Player::White) {
        let next = apply_move(board, &mv);
        // The opponent replies next, so the child is a minimizing node.
        let value = alpha_beta(&next, 0, max_depth, false, alpha, beta);

        if value > best_value {
            best_value = value;
            best_move = Some(mv);
        }
        alpha = alpha.max(value);
    }

    best_move
}
