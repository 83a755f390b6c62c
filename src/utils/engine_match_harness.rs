//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any
//! front-end I/O, with an optional seeded random opening prefix. Multi-jump
//! chains keep the turn with the capturing side, exactly as the session
//! layer does. A side that cannot move loses; games that outlast the ply
//! budget are scored as draws.

use rand::{rngs::StdRng, RngExt, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::draughts_types::Player;
use crate::game_state::game_session::GameOutcome;
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{has_capture_from, legal_moves};
use crate::utils::numeric_notation::format_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// One side won under the session rules.
    Finished(GameOutcome),
    /// Neither side won within the configured ply budget.
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub white_moves: u32,
    pub black_moves: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} draws={} white_moves={} black_moves={}",
            self.games, self.white_wins, self.black_wins, self.draws, self.white_moves,
            self.black_moves
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard opening
/// layout. `engine_white` is White and moves first.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    engine_white.new_game();
    engine_black.new_game();

    let (opening_moves, mut board, mut side) = apply_seeded_random_opening(
        &Board::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        let candidates = legal_moves(&board, side);
        if candidates.is_empty() {
            return Ok(MatchResult {
                outcome: MatchOutcome::Finished(losing_outcome(&board, side)),
                final_board: board,
                opening_moves,
                played_moves,
                white_move_count,
                black_move_count,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let started = Instant::now();
        let out = match side {
            Player::White => engine_white.choose_move(&board, side, &config.go_params)?,
            Player::Black => engine_black.choose_move(&board, side, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match side {
            Player::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Player::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.unwrap_or_else(|| candidates[0].clone());
        if !candidates.contains(&chosen) {
            return Err("engine returned illegal move".to_owned());
        }

        played_moves.push(format_move(&chosen).map_err(|e| e.to_string())?);
        board = apply_move(&board, &chosen);

        // A capture with a further capture from its landing square keeps
        // the turn; the mandatory-capture filter makes the reply a jump.
        if !(chosen.is_capture && has_capture_from(&board, side, chosen.to)) {
            side = side.opponent();
        }
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: board,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of matches with colors fixed and seeds derived from
/// `base_seed`, aggregating win/loss/draw statistics.
pub fn play_engine_match_series<F1, F2>(
    white_factory: F1,
    black_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            println!("[series] game {}/{} seed={}", i + 1, config.games, seed);
        }

        let result = play_engine_match(
            white_factory(),
            black_factory(),
            seed,
            config.per_game.clone(),
        )?;

        match result.outcome {
            MatchOutcome::Finished(outcome) => match outcome.winner() {
                Player::White => stats.white_wins += 1,
                Player::Black => stats.black_wins += 1,
            },
            MatchOutcome::DrawMaxPlies => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);
        stats.white_moves += result.white_move_count;
        stats.black_moves += result.black_move_count;
        stats.white_total_time_ns += result.white_total_time_ns;
        stats.black_total_time_ns += result.black_total_time_ns;
    }

    Ok(stats)
}

fn losing_outcome(board: &Board, stuck_side: Player) -> GameOutcome {
    match stuck_side {
        Player::White => {
            if !board.has_pieces(Player::White) {
                GameOutcome::BlackWinNoPieces
            } else {
                GameOutcome::BlackWinNoMoves
            }
        }
        Player::Black => {
            if !board.has_pieces(Player::Black) {
                GameOutcome::WhiteWinNoPieces
            } else {
                GameOutcome::WhiteWinNoMoves
            }
        }
    }
}

/// Play a seeded random opening prefix, respecting chain turns. Returns
/// the moves made, the resulting board, and the side to move afterwards.
fn apply_seeded_random_opening(
    board: &Board,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(Vec<String>, Board, Player), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = if max_plies <= min_plies {
        min_plies
    } else {
        rng.random_range(min_plies..=max_plies)
    };

    let mut out_board = board.clone();
    let mut side = Player::White;
    let mut moves = Vec::<String>::new();

    for _ in 0..plies {
        let candidates = legal_moves(&out_board, side);
        if candidates.is_empty() {
            break;
        }
        let idx = rng.random_range(0..candidates.len());
        let chosen = candidates[idx].clone();

        moves.push(format_move(&chosen).map_err(|e| e.to_string())?);
        out_board = apply_move(&out_board, &chosen);

        if !(chosen.is_capture && has_capture_from(&out_board, side, chosen.to)) {
            side = side.opponent();
        }
    }

    Ok((moves, out_board, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::utils::numeric_notation::parse_endpoints;

    #[test]
    fn random_opening_is_deterministic_per_seed() {
        let board = Board::new_game();
        let (a, _, _) =
            apply_seeded_random_opening(&board, 42, 2, 6).expect("opening should apply");
        let (b, _, _) =
            apply_seeded_random_opening(&board, 42, 2, 6).expect("opening should apply");
        assert_eq!(a, b);
        assert!(a.len() >= 2);
    }

    #[test]
    fn random_vs_random_match_completes_consistently() {
        let config = MatchConfig {
            max_plies: 80,
            ..MatchConfig::default()
        };
        let result = play_engine_match(
            Box::new(RandomEngine::new()),
            Box::new(RandomEngine::new()),
            7,
            config,
        )
        .expect("match should complete");

        assert_eq!(
            result.white_move_count + result.black_move_count,
            result.played_moves.len() as u32
        );
        for text in result.opening_moves.iter().chain(&result.played_moves) {
            parse_endpoints(text).expect("recorded moves should be well-formed");
        }
    }

    #[test]
    fn minimax_plays_white_in_the_harness() {
        let config = MatchConfig {
            max_plies: 40,
            go_params: GoParams { depth: Some(2) },
            ..MatchConfig::default()
        };
        let result = play_engine_match(
            Box::new(MinimaxEngine::with_depth(2)),
            Box::new(RandomEngine::new()),
            3,
            config,
        )
        .expect("match should complete");

        assert!(result.white_move_count > 0);
    }

    #[test]
    fn series_counts_every_game() {
        let config = MatchSeriesConfig {
            games: 3,
            base_seed: 11,
            per_game: MatchConfig {
                max_plies: 60,
                ..MatchConfig::default()
            },
            verbose: false,
        };
        let stats = play_engine_match_series(
            || Box::new(RandomEngine::new()) as Box<dyn Engine>,
            || Box::new(RandomEngine::new()) as Box<dyn Engine>,
            config,
        )
        .expect("series should complete");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.white_wins + stats.black_wins + stats.draws, 3);
    }
}
