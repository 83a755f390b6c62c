//! Stdio front-end and command loop.
//!
//! A line-oriented protocol for playing against the built-in search: the
//! human plays Black, the engine opens the game as White and answers every
//! committed Black turn. All rules questions are delegated to the session;
//! this module only parses commands and prints state.

use std::io::{self, BufRead, Write};

use crate::game_state::draughts_types::Player;
use crate::game_state::game_session::GameSession;
use crate::game_state::game_state::Board;
use crate::utils::numeric_notation::{format_move, parse_endpoints};
use crate::utils::pdn::write_pdn;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut cli = CliState::new();

    writeln!(stdout, "draughts_engine - type 'help' for commands")?;
    cli.start_new_game(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = cli.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct CliState {
    session: GameSession,
}

impl CliState {
    fn new() -> Self {
        CliState {
            session: GameSession::new(),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let mut parts = line.trim().split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(false);
        };

        match command {
            "quit" | "exit" => return Ok(true),
            "help" => self.print_help(out)?,
            "new" => self.start_new_game(out)?,
            "show" => self.print_position(out)?,
            "moves" => self.print_available_moves(out)?,
            "depth" => self.set_depth(parts.next(), out)?,
            "move" => self.handle_move(parts.next(), out)?,
            "pdn" => self.print_pdn(out)?,
            other => writeln!(out, "unknown command: {other} (try 'help')")?,
        }

        Ok(false)
    }

    fn print_help(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "commands:")?;
        writeln!(out, "  new          start a new game (the engine opens)")?;
        writeln!(out, "  show         print the board")?;
        writeln!(out, "  moves        list your legal moves")?;
        writeln!(out, "  move 9-14    play a move in numeric notation (x for jumps)")?;
        writeln!(out, "  depth N      set the engine search depth")?;
        writeln!(out, "  pdn          print the game record")?;
        writeln!(out, "  quit         leave")?;
        Ok(())
    }

    fn start_new_game(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.session = GameSession::new();
        self.run_engine_turn(out)?;
        self.print_position(out)
    }

    fn handle_move(&mut self, arg: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(text) = arg else {
            writeln!(out, "usage: move 9-14 (or 9x18 for a jump)")?;
            return Ok(());
        };

        if self.session.to_move() != Some(Player::Black) {
            match self.session.outcome() {
                Some(outcome) => writeln!(out, "{outcome}")?,
                None => writeln!(out, "it is not your turn")?,
            }
            return Ok(());
        }

        let (from, to) = match parse_endpoints(text) {
            Ok(endpoints) => endpoints,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };

        match self.session.submit_move(from, to) {
            Ok(report) => {
                if let Ok(played) = format_move(&report.played) {
                    writeln!(out, "you play {played}")?;
                }
                if report.chain_continues {
                    writeln!(out, "multi-jump: continue with the same piece")?;
                } else {
                    self.run_engine_turn(out)?;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }

        self.print_position(out)
    }

    fn run_engine_turn(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.session.to_move() == Some(Player::White) {
            writeln!(out, "white (engine) is thinking...")?;
            match self.session.play_engine_turn() {
                Ok(reports) => {
                    for report in &reports {
                        if let Ok(played) = format_move(&report.played) {
                            writeln!(out, "engine plays {played}")?;
                        }
                    }
                    if reports.is_empty() {
                        writeln!(out, "the engine has no legal moves")?;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }

        if let Some(outcome) = self.session.outcome() {
            writeln!(out, "game over: {outcome}")?;
        }
        Ok(())
    }

    fn print_position(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(self.session.board()))?;
        match (self.session.outcome(), self.session.to_move()) {
            (Some(outcome), _) => writeln!(out, "{outcome}"),
            (None, Some(Player::Black)) if self.session.chain_square().is_some() => {
                writeln!(out, "black's turn (human) - multi-jump!")
            }
            (None, Some(Player::Black)) => writeln!(out, "black's turn (human)"),
            (None, Some(Player::White)) => writeln!(out, "white's turn (engine)"),
            (None, None) => Ok(()),
        }
    }

    fn print_available_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let moves = self.session.available_moves();
        if moves.is_empty() {
            writeln!(out, "no legal moves")?;
            return Ok(());
        }
        let formatted: Vec<String> = moves
            .iter()
            .filter_map(|mv| format_move(mv).ok())
            .collect();
        writeln!(out, "{}", formatted.join(" "))
    }

    fn set_depth(&mut self, arg: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        match arg.and_then(|text| text.parse::<u8>().ok()) {
            Some(depth) if depth > 0 => {
                self.session.set_search_depth(depth);
                writeln!(out, "search depth set to {depth}")
            }
            _ => writeln!(out, "usage: depth N (N >= 1)"),
        }
    }

    fn print_pdn(&self, out: &mut impl Write) -> io::Result<()> {
        match write_pdn(
            &Board::new_game(),
            self.session.history(),
            self.session.outcome(),
        ) {
            Ok(pdn) => write!(out, "{pdn}"),
            Err(err) => writeln!(out, "failed to write pdn: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(cli: &mut CliState, line: &str) -> String {
        let mut out = Vec::new();
        cli.handle_command(line, &mut out).expect("io should not fail");
        String::from_utf8(out).expect("output should be utf-8")
    }

    #[test]
    fn new_game_lets_the_engine_open() {
        let mut cli = CliState::new();
        let output = command(&mut cli, "new");
        assert!(output.contains("engine plays"));
        assert_eq!(cli.session.to_move(), Some(Player::Black));
    }

    #[test]
    fn human_move_round_trip() {
        let mut cli = CliState::new();
        command(&mut cli, "new");

        // Black's back rows are untouched after one engine move, so this
        // opening step is always available.
        let output = command(&mut cli, "move 9-14");
        assert!(output.contains("you play 9-14"));
        assert_eq!(cli.session.to_move(), Some(Player::Black));
        assert!(cli.session.history().len() >= 3);
    }

    #[test]
    fn malformed_and_unknown_input_is_reported() {
        let mut cli = CliState::new();
        command(&mut cli, "new");

        let output = command(&mut cli, "move banana");
        assert!(output.contains("malformed"));

        let output = command(&mut cli, "frobnicate");
        assert!(output.contains("unknown command"));
    }

    #[test]
    fn depth_command_updates_the_session() {
        let mut cli = CliState::new();
        command(&mut cli, "depth 3");
        assert_eq!(cli.session.search_depth(), 3);

        let output = command(&mut cli, "depth zero");
        assert!(output.contains("usage"));
    }

    #[test]
    fn pdn_command_prints_a_record() {
        let mut cli = CliState::new();
        command(&mut cli, "new");
        let output = command(&mut cli, "pdn");
        assert!(output.contains("[Event \"Draughts Engine Game\"]"));
        assert!(output.contains("[Result \"*\"]"));
    }
}
