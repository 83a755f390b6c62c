//! Turn-flow state owned by the presentation layer.
//!
//! `GameSession` holds the mutable game state the core deliberately does
//! not: the current board, the side to move, a pending multi-jump square,
//! the move history, and the final outcome. Every rules question is
//! answered by the core's pure functions; the session only sequences them.
//!
//! The automated side is White and moves first. Human moves are validated
//! with `is_legal` alone, so a human may decline an available capture; the
//! generator's mandatory-capture filter binds the engine side.

use std::error::Error;
use std::fmt;

use crate::game_state::draughts_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::draughts_types::{Move, Player, Square};
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_legal;
use crate::move_generation::legal_move_generator::{has_capture_from, legal_moves};
use crate::search::alpha_beta::find_best_move;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Black ran out of pieces.
    WhiteWinNoPieces,
    /// Black has no legal move left.
    WhiteWinNoMoves,
    /// White ran out of pieces.
    BlackWinNoPieces,
    /// White has no legal move left.
    BlackWinNoMoves,
}

impl GameOutcome {
    #[inline]
    pub const fn winner(self) -> Player {
        match self {
            GameOutcome::WhiteWinNoPieces | GameOutcome::WhiteWinNoMoves => Player::White,
            GameOutcome::BlackWinNoPieces | GameOutcome::BlackWinNoMoves => Player::Black,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::WhiteWinNoPieces => write!(f, "White wins: Black has no pieces"),
            GameOutcome::WhiteWinNoMoves => write!(f, "White wins: Black has no moves"),
            GameOutcome::BlackWinNoPieces => write!(f, "Black wins: White has no pieces"),
            GameOutcome::BlackWinNoMoves => write!(f, "Black wins: White has no moves"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The game is already over.
    GameOver,
    /// A multi-jump is in progress; the next move must start from the
    /// landing square of the previous jump.
    MustContinueChain { from: Square },
    /// The proposed move failed the legality check.
    IllegalMove,
    /// `play_engine_turn` was called while it is not White's turn.
    NotEngineTurn,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver => write!(f, "the game is over"),
            SessionError::MustContinueChain { from } => write!(
                f,
                "multi-jump in progress: move the piece on ({}, {})",
                from.row, from.col
            ),
            SessionError::IllegalMove => write!(f, "that is not a legal move"),
            SessionError::NotEngineTurn => write!(f, "it is not the engine's turn"),
        }
    }
}

impl Error for SessionError {}

/// Result of one committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub played: Move,
    /// The mover captured and has a further capture from the landing
    /// square; the turn does not pass.
    pub chain_continues: bool,
}

/// One game in progress: board, turn, chain state, history, outcome.
pub struct GameSession {
    board: Board,
    to_move: Player,
    chain_square: Option<Square>,
    outcome: Option<GameOutcome>,
    history: Vec<(Player, Move)>,
    search_depth: u8,
}

impl GameSession {
    /// A fresh game from the standard layout. White (the automated side)
    /// moves first.
    pub fn new() -> Self {
        Self::with_board(Board::new_game(), Player::White)
    }

    /// A session over a caller-provided position.
    pub fn with_board(board: Board, to_move: Player) -> Self {
        GameSession {
            board,
            to_move,
            chain_square: None,
            outcome: None,
            history: Vec::new(),
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move, or `None` once the game is over.
    #[inline]
    pub fn to_move(&self) -> Option<Player> {
        if self.outcome.is_some() {
            None
        } else {
            Some(self.to_move)
        }
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn chain_square(&self) -> Option<Square> {
        self.chain_square
    }

    #[inline]
    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    #[inline]
    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth;
    }

    /// Legal moves for the side to move; empty once the game is over.
    /// Front-ends use this to highlight reachable squares.
    pub fn available_moves(&self) -> Vec<Move> {
        match self.to_move() {
            Some(player) => legal_moves(&self.board, player),
            None => Vec::new(),
        }
    }

    /// Submit a move for the side to move, given as its two endpoints.
    /// Two-step submissions have their captured square filled in from the
    /// jump geometry before validation.
    pub fn submit_move(&mut self, from: Square, to: Square) -> Result<TurnReport, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::GameOver);
        }
        if let Some(required) = self.chain_square {
            if from != required {
                return Err(SessionError::MustContinueChain { from: required });
            }
        }

        let mover = self.to_move;
        let mv = if (to.row - from.row).abs() == 2 {
            Move::jump(from, to, from.midpoint(to))
        } else {
            Move::step(from, to)
        };

        if !is_legal(&self.board, &mv, mover) {
            return Err(SessionError::IllegalMove);
        }

        Ok(self.commit(mover, mv))
    }

    /// Let the automated side (White) play out its turn, including any
    /// multi-jump continuations, each found by a fresh search.
    pub fn play_engine_turn(&mut self) -> Result<Vec<TurnReport>, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::GameOver);
        }
        if self.to_move != Player::White {
            return Err(SessionError::NotEngineTurn);
        }

        let mut reports = Vec::new();
        loop {
            let Some(mv) = find_best_move(&self.board, self.search_depth) else {
                self.outcome = Some(GameOutcome::BlackWinNoMoves);
                break;
            };
            let report = self.commit(Player::White, mv);
            let chained = report.chain_continues;
            reports.push(report);
            if self.outcome.is_some() || !chained {
                break;
            }
        }
        Ok(reports)
    }

    /// Apply a validated move and run the post-move bookkeeping: outcome
    /// detection, multi-jump continuation, turn switch.
    fn commit(&mut self, mover: Player, mv: Move) -> TurnReport {
        self.board = apply_move(&self.board, &mv);
        self.history.push((mover, mv.clone()));
        self.refresh_outcome(mover);

        let chain_continues = self.outcome.is_none()
            && mv.is_capture
            && has_capture_from(&self.board, mover, mv.to);

        if chain_continues {
            self.chain_square = Some(mv.to);
        } else {
            self.chain_square = None;
            if self.outcome.is_none() {
                self.to_move = mover.opponent();
            }
        }

        TurnReport {
            played: mv,
            chain_continues,
        }
    }

    /// Terminal checks after `mover` moved: piece extinction for either
    /// side, then whether the mover itself has any move left. The no-move
    /// scan runs against the mover, before the turn switches.
    fn refresh_outcome(&mut self, mover: Player) {
        if !self.board.has_pieces(Player::White) {
            self.outcome = Some(GameOutcome::BlackWinNoPieces);
        } else if !self.board.has_pieces(Player::Black) {
            self.outcome = Some(GameOutcome::WhiteWinNoPieces);
        } else if legal_moves(&self.board, mover).is_empty() {
            self.outcome = Some(match mover {
                Player::White => GameOutcome::BlackWinNoMoves,
                Player::Black => GameOutcome::WhiteWinNoMoves,
            });
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
