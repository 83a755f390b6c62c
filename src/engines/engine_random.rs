//! Random-move baseline engine.
//!
//! Selects uniformly from legal moves and is primarily used for
//! diagnostics, harness testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::draughts_types::Player;
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Draughts Random"
    }

    fn author(&self) -> &str {
        "draughts_engine"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let candidates = legal_moves(board, player);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            candidates.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {} ignored",
                depth
            ));
        }

        if candidates.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = candidates
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(picked.clone());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_checks::is_legal;

    #[test]
    fn picks_a_legal_move_from_the_opening() {
        let board = Board::new_game();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&board, Player::White, &GoParams::default())
            .expect("random engine should not fail");
        let mv = out.best_move.expect("white should have a move");
        assert!(is_legal(&board, &mv, Player::White));
    }

    #[test]
    fn reports_none_when_the_side_cannot_move() {
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

        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&board, Player::White, &GoParams::default())
            .expect("random engine should not fail");
        assert!(out.best_move.is_none());
    }
}
