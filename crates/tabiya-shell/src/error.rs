//! Shell errors.

use tabiya_core::{InvalidMove, MoveParseError};

/// Errors that can occur while parsing or executing a shell command.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {verb}")]
    UnknownCommand {
        /// The unrecognized verb.
        verb: String,
    },

    /// A command was given without its required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that needs the argument.
        command: &'static str,
    },

    /// A square argument is not in `a1`..`h8` form.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The text that failed to parse.
        square: String,
    },

    /// A move argument could not be parsed.
    #[error(transparent)]
    MalformedMove(#[from] MoveParseError),

    /// The game refused the move.
    #[error(transparent)]
    IllegalMove(#[from] InvalidMove),

    /// `set` named an option the shell does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given a value other than `on` or `off`.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// Saved game data could not be encoded or decoded.
    #[error("invalid game data: {source}")]
    Json {
        /// The underlying serde_json error.
        #[from]
        source: serde_json::Error,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
