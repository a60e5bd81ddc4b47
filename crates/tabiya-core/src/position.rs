//! Board coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PositionOutOfBounds;

/// A board coordinate: rank 1–8 (White's back rank is 1) and file 1–8 (file a is 1).
///
/// Coordinates are signed so that [`Position::offset`] can step off the board;
/// anything produced by `offset` must pass [`Position::in_bounds`] before use.
/// Deserialized positions are checked, so a decoded `Position` is always in bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    rank: i8,
    file: i8,
}

impl Position {
    /// Create a position from a rank and file.
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Position {
        Position { rank, file }
    }

    /// Parse algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Position::new((rank_byte - b'0') as i8, (file_byte - b'a') as i8 + 1))
    }

    #[inline]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Return `true` if both coordinates lie in 1..=8.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.rank >= 1 && self.rank <= 8 && self.file >= 1 && self.file <= 8
    }

    /// Return the position shifted by the given deltas. No bounds checking.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Position {
        Position::new(self.rank + d_rank, self.file + d_file)
    }

    /// Iterate over all 64 squares, rank 1 first, file a first within a rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (1i8..=8).flat_map(|rank| (1i8..=8).map(move |file| Position::new(rank, file)))
    }

    /// Zero-based `(row, column)` indices into an 8x8 grid.
    ///
    /// Only meaningful for in-bounds positions.
    #[inline]
    pub(crate) const fn grid_index(self) -> (usize, usize) {
        ((self.rank - 1) as usize, (self.file - 1) as usize)
    }
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    rank: i8,
    file: i8,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionOutOfBounds;

    fn try_from(raw: RawPosition) -> Result<Position, PositionOutOfBounds> {
        let pos = Position::new(raw.rank, raw.file);
        if pos.in_bounds() {
            Ok(pos)
        } else {
            Err(PositionOutOfBounds {
                rank: raw.rank,
                file: raw.file,
            })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file = (b'a' + (self.file - 1) as u8) as char;
            write!(f, "{file}{}", self.rank)
        } else {
            write!(f, "({},{})", self.rank, self.file)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn bounds() {
        assert!(Position::new(1, 1).in_bounds());
        assert!(Position::new(8, 8).in_bounds());
        assert!(!Position::new(0, 4).in_bounds());
        assert!(!Position::new(4, 9).in_bounds());
        assert!(!Position::new(-1, -1).in_bounds());
    }

    #[test]
    fn offset_does_not_clamp() {
        let corner = Position::new(8, 8);
        let off = corner.offset(1, 2);
        assert_eq!(off, Position::new(9, 10));
        assert!(!off.in_bounds());
        assert_eq!(off.offset(-1, -2), corner);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::new(1, 1)));
        assert_eq!(Position::from_algebraic("e4"), Some(Position::new(4, 5)));
        assert_eq!(Position::from_algebraic("h8"), Some(Position::new(8, 8)));
        assert_eq!(format!("{}", Position::new(4, 5)), "e4");
        assert_eq!(format!("{}", Position::new(1, 1)), "a1");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Position::from_algebraic("i1").is_none());
        assert!(Position::from_algebraic("a9").is_none());
        assert!(Position::from_algebraic("a0").is_none());
        assert!(Position::from_algebraic("").is_none());
        assert!(Position::from_algebraic("e44").is_none());
    }

    #[test]
    fn all_covers_board() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert!(all.iter().all(|p| p.in_bounds()));
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[63], Position::new(8, 8));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Position::new(4, 5)), "Position(e4)");
        assert_eq!(format!("{:?}", Position::new(0, 3)), "Position((0,3))");
    }
}
