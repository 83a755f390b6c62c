//! Alpha-beta minimax engine for the automated side.
//!
//! Wraps the search root in the `Engine` interface. The search maximizes
//! for White, so this engine only plays the automated side; asking it to
//! move for Black is a caller error.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::draughts_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::draughts_types::Player;
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::alpha_beta::find_best_move;
use crate::search::board_scoring::material_score;

pub struct MinimaxEngine {
    default_depth: u8,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            default_depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    pub fn with_depth(default_depth: u8) -> Self {
        Self { default_depth }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Draughts Minimax"
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
        if player != Player::White {
            return Err("minimax engine plays the automated side (White) only".to_owned());
        }

        let depth = params.depth.unwrap_or(self.default_depth);
        let candidates = legal_moves(board, player);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine legal_moves {} depth {}",
            candidates.len(),
            depth
        ));

        out.best_move = find_best_move(board, depth);
        out.info_lines.push(format!(
            "info string minimax_engine material {}",
            material_score(board)
        ));
        Ok(out)
    }
}
