//! Castling eligibility as "has this king or rook ever moved" flags.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::position::Position;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File of the rook this side castles with.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 8,
            CastleSide::QueenSide => 1,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_destination_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 3,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_destination_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 4,
        }
    }

    /// Files strictly between king and rook; all must be empty.
    #[inline]
    pub const fn empty_files(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[6, 7],
            CastleSide::QueenSide => &[2, 3, 4],
        }
    }

    /// Files the king crosses or lands on; none may be attacked.
    #[inline]
    pub const fn king_path_files(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[6, 7],
            CastleSide::QueenSide => &[4, 3],
        }
    }

    /// The side a king move of `file_delta` files castles toward, if it is a castling stride.
    #[inline]
    pub const fn from_king_stride(file_delta: i8) -> Option<CastleSide> {
        match file_delta {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// Per-color movement history of the king and both corner rooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastleFlags {
    pub king_moved: bool,
    pub rook_a_moved: bool,
    pub rook_h_moved: bool,
}

impl CastleFlags {
    fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.rook_h_moved,
            CastleSide::QueenSide => self.rook_a_moved,
        }
    }
}

/// Castling flags for both colors.
///
/// Flags are only ever set, never cleared: once a king or corner rook has
/// moved, the matching castle is gone for the rest of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastleRights {
    white: CastleFlags,
    black: CastleFlags,
}

impl CastleRights {
    /// Rights at the start of a game: nothing has moved.
    pub const fn new() -> CastleRights {
        CastleRights {
            white: CastleFlags {
                king_moved: false,
                rook_a_moved: false,
                rook_h_moved: false,
            },
            black: CastleFlags {
                king_moved: false,
                rook_a_moved: false,
                rook_h_moved: false,
            },
        }
    }

    /// Return the flags for `color`.
    #[inline]
    pub const fn flags(&self, color: Color) -> CastleFlags {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn flags_mut(&mut self, color: Color) -> &mut CastleFlags {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Return `true` if neither the king nor the `side` rook of `color` has moved.
    pub fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        let flags = self.flags(color);
        !flags.king_moved && !flags.rook_moved(side)
    }

    /// Record that the king of `color` has moved.
    pub fn mark_king_moved(&mut self, color: Color) {
        self.flags_mut(color).king_moved = true;
    }

    /// Record a rook leaving `from`. Only the four corner squares count.
    pub fn mark_rook_moved_from(&mut self, from: Position) {
        let color = match from.rank() {
            1 => Color::White,
            8 => Color::Black,
            _ => return,
        };
        let flags = self.flags_mut(color);
        match from.file() {
            1 => flags.rook_a_moved = true,
            8 => flags.rook_h_moved = true,
            _ => {}
        }
    }
}
