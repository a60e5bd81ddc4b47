//! Interactive session holding one game and the shell options.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tabiya_core::{Game, Position};

use crate::command::{Command, ShellOption, parse_command};
use crate::error::ShellError;

/// Options adjustable via `set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Print the board after every accepted move.
    pub auto_board: bool,
    /// Print the status after every accepted move.
    pub show_status: bool,
}

/// Whether the session keeps reading after a command.
enum Flow {
    Continue,
    Quit,
}

/// A shell session: one game plus the shell configuration.
///
/// Reads one command per line and writes replies to the output. Command
/// errors are reported and the session carries on; only I/O errors end it.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: ShellConfig,
}

impl Session {
    /// Create a session with a fresh game and default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShellConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> ShellConfig {
        self.config
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ShellError> {
        info!("tabiya shell starting");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err @ ShellError::Io { .. }) => return Err(err),
                Err(ShellError::IllegalMove(_)) => {
                    warn!(cmd = %trimmed, "illegal move");
                    writeln!(output, "illegal move")?;
                }
                Err(err) => {
                    warn!(error = %err, "command failed");
                    writeln!(output, "error: {err}")?;
                }
            }
            output.flush()?;
        }

        info!("tabiya shell shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, ShellError> {
        match command {
            Command::New => {
                self.game = Game::new();
                writeln!(out, "ok")?;
            }
            Command::Board => self.write_board(out)?,
            Command::Moves(from) => self.write_moves(from, out)?,
            Command::Move(mv) => {
                self.game.make_move(mv)?;
                writeln!(out, "ok")?;
                if self.config.auto_board {
                    self.write_board(out)?;
                }
                if self.config.show_status {
                    self.write_status(out)?;
                }
            }
            Command::Status => self.write_status(out)?,
            Command::Save => {
                let json = serde_json::to_string(&self.game)?;
                writeln!(out, "{json}")?;
            }
            Command::Load(game) => {
                self.game = *game;
                writeln!(out, "ok")?;
            }
            Command::Set(option, enabled) => {
                match option {
                    ShellOption::AutoBoard => self.config.auto_board = enabled,
                    ShellOption::AutoStatus => self.config.show_status = enabled,
                }
                writeln!(out, "ok")?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        writeln!(out, "{}", self.game.board().pretty())?;
        Ok(())
    }

    fn write_moves<W: Write>(&self, from: Position, out: &mut W) -> Result<(), ShellError> {
        match self.game.legal_moves(from) {
            None => writeln!(out, "empty")?,
            Some(moves) if moves.is_empty() => writeln!(out, "none")?,
            Some(moves) => {
                let mut texts: Vec<String> = moves.into_iter().map(|mv| mv.to_uci()).collect();
                texts.sort();
                writeln!(out, "{}", texts.join(" "))?;
            }
        }
        Ok(())
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        writeln!(out, "{} {}", self.game.turn(), self.game.status())?;
        Ok(())
    }
}
