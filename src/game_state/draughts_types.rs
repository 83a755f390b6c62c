//! Core value types for the draughts engine.
//!
//! Squares, pieces, players, and moves are plain immutable values. None of
//! them borrow from the board they were derived from, so search code can
//! clone and discard them freely.

use crate::game_state::draughts_rules::BOARD_SIZE;

/// Side to move. White is the automated side, Black the human side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }
}

/// Piece kind (player is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board: kind plus owning player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    #[inline]
    pub const fn man(player: Player) -> Self {
        Piece {
            kind: PieceKind::Man,
            player,
        }
    }

    #[inline]
    pub const fn king(player: Player) -> Self {
        Piece {
            kind: PieceKind::King,
            player,
        }
    }
}

/// Board coordinate. Signed so that off-board candidates produced by adding
/// direction deltas stay representable and are rejected by `is_playable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Both coordinates on the board.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// On the board and a dark square. Only dark squares are playable; this
    /// predicate is the single source of truth for square validity.
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.in_bounds() && (self.row + self.col) % 2 != 0
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The square halfway between `self` and `other`. Meaningful only for
    /// two-step diagonal jumps.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Self {
        Square {
            row: self.row + (other.row - self.row) / 2,
            col: self.col + (other.col - self.col) / 2,
        }
    }

    /// Iterate every playable (dark) square in row-major order.
    pub fn all_playable() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE)
                .map(move |col| Square::new(row, col))
                .filter(|square| square.is_playable())
        })
    }
}

/// A proposed board transition: endpoints, a capture flag, and the captured
/// squares (at most one entry; multi-captures are successive single jumps).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    pub captured: Vec<Square>,
}

impl Move {
    /// A quiet one-step move.
    #[inline]
    pub fn step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_capture: false,
            captured: Vec::new(),
        }
    }

    /// A jump over a single captured square.
    #[inline]
    pub fn jump(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            is_capture: true,
            captured: vec![captured],
        }
    }
}
