//! Chess move representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoveParseError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A move from `start` to `end`, with the promotion kind for pawn moves onto the back rank.
///
/// Equality is structural: a move without promotion never equals the same
/// squares with a promotion kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a move without promotion.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Move {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Create a pawn move that promotes to `kind`.
    #[inline]
    pub const fn promotion(start: Position, end: Position, kind: PieceKind) -> Move {
        Move {
            start,
            end,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Signed rank distance travelled. Saturates for off-board coordinates.
    #[inline]
    pub(crate) const fn rank_delta(self) -> i8 {
        self.end.rank().saturating_sub(self.start.rank())
    }

    /// Signed file distance travelled. Saturates for off-board coordinates.
    #[inline]
    pub(crate) const fn file_delta(self) -> i8 {
        self.end.file().saturating_sub(self.start.file())
    }

    /// Return the coordinate form, e.g. "e2e4" or "e7e8q".
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let text = s.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(MoveParseError::Malformed {
                text: text.to_string(),
            });
        }

        let square = |part: &str| {
            Position::from_algebraic(part).ok_or_else(|| MoveParseError::InvalidSquare {
                square: part.to_string(),
            })
        };
        let start = square(&text[0..2])?;
        let end = square(&text[2..4])?;

        match text[4..].chars().next() {
            None => Ok(Move::new(start, end)),
            Some(c) => match PieceKind::from_letter(c) {
                Some(kind) if kind.is_promotion_target() => Ok(Move::promotion(start, end, kind)),
                _ => Err(MoveParseError::InvalidPromotion { character: c }),
            },
        }
    }
}
