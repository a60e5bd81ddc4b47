//! Error types for move submission and coordinate parsing.

/// A submitted move was rejected.
///
/// Raised when the origin square is empty, holds a piece of the side not to
/// move, or the move is not among that piece's legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid move")]
pub struct InvalidMove;

/// A decoded coordinate lies outside ranks and files 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position out of bounds: rank {rank}, file {file}")]
pub struct PositionOutOfBounds {
    pub rank: i8,
    pub file: i8,
}

/// Errors from parsing coordinate move text such as "e2e4" or "e7e8q".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The text is not 4 or 5 ASCII characters.
    #[error("malformed move: \"{text}\"")]
    Malformed {
        /// The rejected text.
        text: String,
    },
    /// One of the two squares is not valid algebraic notation.
    #[error("invalid square: \"{square}\"")]
    InvalidSquare {
        /// The rejected square text.
        square: String,
    },
    /// The promotion suffix is not one of `q`, `r`, `b`, `n`.
    #[error("invalid promotion piece: '{character}'")]
    InvalidPromotion {
        /// The rejected suffix character.
        character: char,
    },
}
