//! Crate root module declarations for the draughts engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so the binary, tests, and external
//! tooling can import stable module paths.

pub mod game_state {
    pub mod draughts_rules;
    pub mod draughts_types;
    pub mod game_session;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod numeric_notation;
    pub mod pdn;
    pub mod render_game_state;
}

pub mod cli;
