//! Shell command parsing.

use tabiya_core::{Game, Move, Position};

use crate::error::ShellError;

/// Runtime options adjustable with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    /// Print the board after every accepted move.
    AutoBoard,
    /// Print the game status after every accepted move.
    AutoStatus,
}

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start a fresh game.
    New,
    /// `board` -- print the board.
    Board,
    /// `moves <square>` -- list the legal moves from a square.
    Moves(Position),
    /// `move <coord>` -- submit a move such as `e2e4` or `e7e8q`.
    Move(Move),
    /// `status` -- print the side to move and whether it is in check, mate or stalemate.
    Status,
    /// `save` -- print the game as JSON.
    Save,
    /// `load <json>` -- replace the game with a saved one.
    Load(Box<Game>),
    /// `set <option> <on|off>` -- change a shell option.
    Set(ShellOption, bool),
    /// `quit` -- end the session.
    Quit,
}

/// Parse a single non-empty line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "save" => Ok(Command::Save),
        "quit" => Ok(Command::Quit),
        "moves" => parse_square(required(rest, "moves")?).map(Command::Moves),
        "move" => Ok(Command::Move(required(rest, "move")?.parse()?)),
        "load" => {
            let game: Game = serde_json::from_str(required(rest, "load")?)?;
            Ok(Command::Load(Box::new(game)))
        }
        "set" => parse_set(rest),
        _ => Err(ShellError::UnknownCommand {
            verb: verb.to_string(),
        }),
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ShellError> {
    if rest.is_empty() {
        Err(ShellError::MissingArgument { command })
    } else {
        Ok(rest)
    }
}

fn parse_square(text: &str) -> Result<Position, ShellError> {
    Position::from_algebraic(text).ok_or_else(|| ShellError::InvalidSquare {
        square: text.to_string(),
    })
}

/// Parse `set <option> <on|off>` arguments.
fn parse_set(rest: &str) -> Result<Command, ShellError> {
    let mut tokens = rest.split_whitespace();
    let name = tokens
        .next()
        .ok_or(ShellError::MissingArgument { command: "set" })?;
    let value = tokens
        .next()
        .ok_or(ShellError::MissingArgument { command: "set" })?;

    let option = match name.to_ascii_lowercase().as_str() {
        "autoboard" => ShellOption::AutoBoard,
        "autostatus" => ShellOption::AutoStatus,
        _ => {
            return Err(ShellError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    let enabled = match value.to_ascii_lowercase().as_str() {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(ShellError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };

    Ok(Command::Set(option, enabled))
}
