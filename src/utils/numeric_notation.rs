//! Standard draughts numeric notation.
//!
//! Dark squares are numbered 1-32 in reading order, top-left to
//! bottom-right. Moves are written `from-to` for quiet moves and
//! `fromxto` for captures, as in Portable Draughts Notation movetext.

use std::error::Error;
use std::fmt;

use crate::game_state::draughts_types::{Move, Player, Square};
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_checks::is_legal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Square number outside `1..=32`.
    NumberOutOfRange(u32),
    /// Coordinate that is not a playable dark square.
    NotAPlayableSquare(Square),
    /// Move text that does not parse as `from-to` or `fromxto`.
    MalformedMove(String),
    /// A syntactically valid move that fails the legality check.
    IllegalMove(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::NumberOutOfRange(n) => {
                write!(f, "square number {n} is outside 1..=32")
            }
            NotationError::NotAPlayableSquare(square) => write!(
                f,
                "({}, {}) is not a playable square",
                square.row, square.col
            ),
            NotationError::MalformedMove(text) => write!(f, "malformed move text: {text:?}"),
            NotationError::IllegalMove(text) => write!(f, "illegal move: {text}"),
        }
    }
}

impl Error for NotationError {}

/// Numeric label of a playable square: `(0, 1)` is 1, `(7, 6)` is 32.
pub fn square_to_number(square: Square) -> Result<u8, NotationError> {
    if !square.is_playable() {
        return Err(NotationError::NotAPlayableSquare(square));
    }
    Ok((square.row * 4 + square.col / 2 + 1) as u8)
}

/// Inverse of `square_to_number`.
pub fn number_to_square(number: u32) -> Result<Square, NotationError> {
    if !(1..=32).contains(&number) {
        return Err(NotationError::NumberOutOfRange(number));
    }
    let index = (number - 1) as i8;
    let row = index / 4;
    let offset = (index % 4) * 2;
    // Even rows have their dark squares on odd columns.
    let col = if row % 2 == 0 { offset + 1 } else { offset };
    Ok(Square::new(row, col))
}

/// Format a move as numeric movetext, `x` separating captures.
pub fn format_move(mv: &Move) -> Result<String, NotationError> {
    let from = square_to_number(mv.from)?;
    let to = square_to_number(mv.to)?;
    let separator = if mv.is_capture { 'x' } else { '-' };
    Ok(format!("{from}{separator}{to}"))
}

/// Parse move text into its two endpoint squares. The capture flag is
/// recovered from the jump geometry, not the separator, so `9-18` and
/// `9x18` describe the same jump.
pub fn parse_endpoints(text: &str) -> Result<(Square, Square), NotationError> {
    let trimmed = text.trim();
    let mut parts = trimmed.split(['-', 'x']);

    let (Some(from_text), Some(to_text), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(NotationError::MalformedMove(trimmed.to_owned()));
    };

    let from_number = from_text
        .trim()
        .parse::<u32>()
        .map_err(|_| NotationError::MalformedMove(trimmed.to_owned()))?;
    let to_number = to_text
        .trim()
        .parse::<u32>()
        .map_err(|_| NotationError::MalformedMove(trimmed.to_owned()))?;

    Ok((number_to_square(from_number)?, number_to_square(to_number)?))
}

/// Parse and validate a full move for `player` on `board`, filling in the
/// captured square of a jump from its geometry.
pub fn parse_move(text: &str, board: &Board, player: Player) -> Result<Move, NotationError> {
    let (from, to) = parse_endpoints(text)?;
    let mv = if (to.row - from.row).abs() == 2 {
        Move::jump(from, to, from.midpoint(to))
    } else {
        Move::step(from, to)
    };

    if !is_legal(board, &mv, player) {
        return Err(NotationError::IllegalMove(text.trim().to_owned()));
    }
    Ok(mv)
}
