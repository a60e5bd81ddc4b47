//! The 8x8 piece grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Back-rank piece order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// Cell `[r][f]` holds the piece on rank `r + 1`, file `f + 1`. Cloning copies
/// the whole grid, so a clone can be mutated freely without touching the original.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset_to_standard_setup();
        board
    }

    /// Put `piece` on `pos`, replacing whatever was there.
    ///
    /// Positions outside the board are ignored.
    pub fn place(&mut self, pos: Position, piece: Piece) {
        if let Some(cell) = self.cell_mut(pos) {
            *cell = Some(piece);
        }
    }

    /// Take the piece off `pos`, returning it.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.cell_mut(pos).and_then(Option::take)
    }

    /// Return the piece on `pos`, if any.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.in_bounds() {
            return None;
        }
        let (row, col) = pos.grid_index();
        self.squares[row][col]
    }

    /// Return `true` if `pos` holds no piece.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Return `true` if `pos` holds a piece of the side opposing `color`.
    #[inline]
    pub fn is_enemy(&self, pos: Position, color: Color) -> bool {
        self.get(pos).is_some_and(|p| p.color() != color)
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.in_bounds()
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// Clear the board and set up the 32 pieces of the opening array.
    pub fn reset_to_standard_setup(&mut self) {
        self.clear();
        for color in Color::ALL {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (idx, kind) in BACK_RANK.into_iter().enumerate() {
                let file = idx as i8 + 1;
                self.place(Position::new(back, file), Piece::new(color, kind));
                self.place(Position::new(pawns, file), Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    /// Return the square of the first king of `color` found, if any.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        Position::all().find(|&pos| self.get(pos) == Some(king))
    }

    /// Iterate over every piece of `color` with its square.
    pub fn occupied(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.get(pos) {
            Some(piece) if piece.color() == color => Some((pos, piece)),
            _ => None,
        })
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Option<Piece>> {
        if !pos.in_bounds() {
            return None;
        }
        let (row, col) = pos.grid_index();
        Some(&mut self.squares[row][col])
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (1i8..=8).rev() {
            write!(f, "{rank}  ")?;
            for file in 1i8..=8 {
                let c = board
                    .get(Position::new(rank, file))
                    .map_or('.', Piece::letter);
                if file < 8 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
