//! Full legal move generation.
//!
//! Sweeps every owned piece through the four diagonal directions, testing
//! the one-step and two-step candidates against the legality predicate,
//! then applies the mandatory-capture filter. The returned list is also the
//! sole mechanism for detecting multi-jump continuations and the
//! no-legal-move terminal state: callers inspect its contents, never a
//! separate code path.

use crate::game_state::draughts_rules::{man_advances, DIAGONAL_DIRECTIONS};
use crate::game_state::draughts_types::{Move, PieceKind, Player, Square};
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_checks::{is_legal, owned_by};

/// Enumerate the legal moves for `player`.
///
/// If any capture exists, only captures are returned: a capture must be
/// taken when available. An empty result means `player` has no legal move.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut quiet_moves = Vec::new();
    let mut capture_moves = Vec::new();

    for from in Square::all_playable() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if !owned_by(piece, player) {
            continue;
        }

        for (d_row, d_col) in DIAGONAL_DIRECTIONS {
            let step = Move::step(from, from.offset(d_row, d_col));
            if is_legal(board, &step, player) {
                // Kings step in any direction; men only toward the
                // opponent's home row, via the same predicate the legality
                // check uses.
                if piece.kind == PieceKind::King || man_advances(player, d_row) {
                    quiet_moves.push(step);
                }
            }

            let jumped = from.offset(d_row, d_col);
            let jump = Move::jump(from, from.offset(2 * d_row, 2 * d_col), jumped);
            if is_legal(board, &jump, player) {
                capture_moves.push(jump);
            }
        }
    }

    if !capture_moves.is_empty() {
        return capture_moves;
    }
    quiet_moves
}

/// Whether any capture move for `player` starts at `from`. This is the
/// multi-jump continuation probe used by the session layer.
pub fn has_capture_from(board: &Board, player: Player, from: Square) -> bool {
    legal_moves(board, player)
        .iter()
        .any(|mv| mv.is_capture && mv.from == from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_has_seven_moves_per_side() {
        let board = Board::new_game();

        let white = legal_moves(&board, Player::White);
        assert_eq!(white.len(), 7);
        assert!(white.iter().all(|mv| !mv.is_capture));

        let black = legal_moves(&board, Player::Black);
        assert_eq!(black.len(), 7);
        assert!(black.iter().all(|mv| !mv.is_capture));
    }

    #[test]
    fn captures_suppress_quiet_moves() {
        let board = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            ........\n\
            ..b.....\n\
            ...w....\n\
            ........\n\
            .....w..\n\
            ........",
        )
        .expect("diagram should parse");

        let moves = legal_moves(&board, Player::White);
        assert!(!moves.is_empty());
        assert!(
            moves.iter().all(|mv| mv.is_capture),
            "quiet moves must be discarded when a capture exists: {moves:?}"
        );
        assert!(moves
            .iter()
            .any(|mv| mv.from == Square::new(4, 3) && mv.captured == vec![Square::new(3, 2)]));
    }

    #[test]
    fn generated_captures_carry_the_jumped_square() {
        let board = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            ........\n\
            ....b...\n\
            ...w....\n\
            ........\n\
            ........\n\
            ........",
        )
        .expect("diagram should parse");

        let moves = legal_moves(&board, Player::White);
        assert_eq!(moves.len(), 1);
        let jump = &moves[0];
        assert!(jump.is_capture);
        assert_eq!(jump.from, Square::new(4, 3));
        assert_eq!(jump.to, Square::new(2, 5));
        assert_eq!(jump.captured, vec![Square::new(3, 4)]);
    }

    #[test]
    fn side_with_no_pieces_has_no_moves() {
        let board = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ..w...w.\n\
            ........\n\
            ........",
        )
        .expect("diagram should parse");

        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(!legal_moves(&board, Player::White).is_empty());
    }

    #[test]
    fn blocked_side_has_no_moves() {
        // The White man in the corner is boxed in: its only step square is
        // occupied and the jump landing square is occupied too.
        let board = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ........\n\
            ..b.....\n\
            .b......\n\
            w.......",
        )
        .expect("diagram should parse");

        assert!(legal_moves(&board, Player::White).is_empty());
    }

    #[test]
    fn continuation_probe_finds_captures_from_a_square() {
        let board = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            ........\n\
            ..b.....\n\
            ...w....\n\
            ........\n\
            ........\n\
            ........",
        )
        .expect("diagram should parse");

        assert!(has_capture_from(&board, Player::White, Square::new(4, 3)));
        assert!(!has_capture_from(&board, Player::White, Square::new(2, 1)));
    }

    #[test]
    fn generation_is_deterministic() {
        let board = Board::new_game();
        assert_eq!(
            legal_moves(&board, Player::White),
            legal_moves(&board, Player::White)
        );
    }
}
