//! PDN read/write utilities for game history interchange.
//!
//! Serializes move history and headers to Portable Draughts Notation text
//! and parses movetext back into move sequences suitable for replay and
//! analysis. Multi-jump turns are written as one chained token
//! (`9x18x25`), matching common PDN practice.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::draughts_types::{Move, Player};
use crate::game_state::game_session::GameOutcome;
use crate::game_state::game_state::Board;
use crate::move_generation::legal_move_apply::apply_move;
use crate::utils::numeric_notation::{parse_move, square_to_number};

/// PDN result marker for an outcome, `*` while the game is running.
pub fn result_string(outcome: Option<GameOutcome>) -> &'static str {
    match outcome {
        Some(outcome) => match outcome.winner() {
            Player::White => "1-0",
            Player::Black => "0-1",
        },
        None => "*",
    }
}

/// Write a PDN record with the default header set.
pub fn write_pdn(
    initial: &Board,
    history: &[(Player, Move)],
    outcome: Option<GameOutcome>,
) -> Result<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Draughts Engine Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_string(outcome).to_owned());

    if *initial != Board::new_game() {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert(
            "Position".to_owned(),
            initial.to_diagram().replace('\n', "/"),
        );
    }

    write_pdn_with_headers(history, outcome, &headers)
}

/// Write a PDN record with caller-provided headers.
pub fn write_pdn_with_headers(
    history: &[(Player, Move)],
    outcome: Option<GameOutcome>,
    headers: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pdn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 2);
    let mut move_number = 1u32;
    let mut at_start = true;

    for turn in group_turns(history) {
        let (player, moves) = turn;
        if player == Player::White {
            movetext_parts.push(format!("{move_number}."));
        } else if at_start {
            movetext_parts.push(format!("{move_number}..."));
        }
        movetext_parts.push(turn_token(moves)?);
        if player == Player::Black {
            move_number += 1;
        }
        at_start = false;
    }

    movetext_parts.push(result_string(outcome).to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

/// Parse PDN movetext into the move sequence it encodes, replaying each
/// move against the evolving board so every hop is validated.
pub fn parse_pdn_movetext(
    movetext: &str,
    initial: &Board,
    starts: Player,
) -> Result<Vec<(Player, Move)>, String> {
    let mut board = initial.clone();
    let mut player = starts;
    let mut history = Vec::<(Player, Move)>::new();

    for token in movetext.split_whitespace() {
        if token.ends_with('.') {
            continue;
        }
        if matches!(token, "*" | "1-0" | "0-1" | "1/2-1/2") {
            continue;
        }

        let numbers: Vec<&str> = token.split(['-', 'x']).collect();
        if numbers.len() < 2 {
            return Err(format!("movetext token too short: {token:?}"));
        }

        for pair in numbers.windows(2) {
            let hop = format!("{}-{}", pair[0], pair[1]);
            let mv = parse_move(&hop, &board, player)
                .map_err(|e| format!("bad hop {hop:?} in token {token:?}: {e}"))?;
            board = apply_move(&board, &mv);
            history.push((player, mv));
        }

        player = player.opponent();
    }

    Ok(history)
}

/// One turn: a player and the (possibly chained) moves it comprises.
fn group_turns(history: &[(Player, Move)]) -> Vec<(Player, Vec<&Move>)> {
    let mut turns = Vec::<(Player, Vec<&Move>)>::new();
    for (player, mv) in history {
        match turns.last_mut() {
            Some((last_player, moves)) if *last_player == *player => moves.push(mv),
            _ => turns.push((*player, vec![mv])),
        }
    }
    turns
}

fn turn_token(moves: Vec<&Move>) -> Result<String, String> {
    let first = moves
        .first()
        .ok_or_else(|| "empty turn in move history".to_owned())?;
    let mut token = square_to_number(first.from)
        .map_err(|e| e.to_string())?
        .to_string();
    for mv in &moves {
        token.push(if mv.is_capture { 'x' } else { '-' });
        token.push_str(
            &square_to_number(mv.to)
                .map_err(|e| e.to_string())?
                .to_string(),
        );
    }
    Ok(token)
}

fn escape_pdn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::draughts_types::Square;

    #[test]
    fn writes_headers_and_numbered_movetext() {
        let history = vec![
            (
                Player::White,
                Move::step(Square::new(5, 0), Square::new(4, 1)),
            ),
            (
                Player::Black,
                Move::step(Square::new(2, 1), Square::new(3, 2)),
            ),
            (
                Player::White,
                Move::step(Square::new(5, 4), Square::new(4, 5)),
            ),
        ];

        let pdn = write_pdn(&Board::new_game(), &history, None).expect("pdn should write");
        assert!(pdn.contains("[Event \"Draughts Engine Game\"]"));
        assert!(pdn.contains("[Result \"*\"]"));
        assert!(pdn.contains("[Date \""));
        assert!(!pdn.contains("[SetUp"));
        assert!(pdn.ends_with("1. 21-17 9-14 2. 23-19 *\n"));
    }

    #[test]
    fn chained_jumps_become_one_token() {
        let initial = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            .b......\n\
            ..w.....\n\
            ........\n\
            ..w.....\n\
            ........\n\
            w.......",
        )
        .expect("diagram should parse");

        let history = vec![
            (
                Player::Black,
                Move::jump(Square::new(2, 1), Square::new(4, 3), Square::new(3, 2)),
            ),
            (
                Player::Black,
                Move::jump(Square::new(4, 3), Square::new(6, 1), Square::new(5, 2)),
            ),
        ];

        let pdn = write_pdn(&initial, &history, None).expect("pdn should write");
        assert!(pdn.contains("[SetUp \"1\"]"));
        assert!(pdn.ends_with("1... 9x18x25 *\n"));
    }

    #[test]
    fn movetext_round_trips_through_the_parser() {
        let initial = Board::from_diagram(
            "\
            ........\n\
            ........\n\
            .b......\n\
            ..w.....\n\
            ........\n\
            ..w.....\n\
            ........\n\
            w.......",
        )
        .expect("diagram should parse");

        let history = vec![
            (
                Player::Black,
                Move::jump(Square::new(2, 1), Square::new(4, 3), Square::new(3, 2)),
            ),
            (
                Player::Black,
                Move::jump(Square::new(4, 3), Square::new(6, 1), Square::new(5, 2)),
            ),
        ];

        let pdn = write_pdn(&initial, &history, None).expect("pdn should write");
        let movetext = pdn
            .lines()
            .last()
            .expect("pdn should end with a movetext line");
        let parsed = parse_pdn_movetext(movetext, &initial, Player::Black)
            .expect("movetext should parse");
        assert_eq!(parsed, history);
    }

    #[test]
    fn parser_rejects_illegal_hops() {
        let board = Board::new_game();
        assert!(parse_pdn_movetext("1. 21-2", &board, Player::White).is_err());
        assert!(parse_pdn_movetext("1. banana", &board, Player::White).is_err());
    }
}
