//! Engine abstraction layer used by the CLI and match harness.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped at runtime behind a single trait
//! interface. Engines report diagnostics as `info string` lines in the
//! output payload; the front-end decides whether to print them.

use crate::game_state::draughts_types::{Move, Player};
use crate::game_state::game_state::Board;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;
    fn author(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for `player` on `board`. `best_move` is `None` when
    /// the side has no legal move.
    fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
