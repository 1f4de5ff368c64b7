//! Commands typed at the game prompt

use anyhow::{bail, Result};
use checkers_core::{parse_square, parse_step, Position, Step};

pub const HELP: &str = "\
Commands:
  c3 d4 | c3-d4 | c3xe5   move a piece (jumps are written the same way)
  moves <square>          list where a piece may go
  hint                    ask the coach for a move
  board                   show the board
  history                 list the moves so far
  help                    show this help
  quit                    leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Step),
    Moves(Position),
    Hint,
    Board,
    History,
    Help,
    Quit,
    Empty,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Ok(Command::Empty);
    };

    let cmd = match (first.to_ascii_lowercase().as_str(), parts.len()) {
        ("hint", 1) => Command::Hint,
        ("board", 1) => Command::Board,
        ("history", 1) => Command::History,
        ("help" | "?", 1) => Command::Help,
        ("quit" | "exit", 1) => Command::Quit,
        ("moves", 2) => Command::Moves(parse_square(parts[1])?),
        ("hint" | "board" | "history" | "help" | "quit" | "exit" | "moves", _) => {
            bail!("wrong number of arguments for '{first}' (type 'help')")
        }
        _ => match parse_step(line) {
            Ok(step) => Command::Move(step),
            Err(_) => bail!("unrecognised command '{}' (type 'help')", line.trim()),
        },
    };
    Ok(cmd)
}
