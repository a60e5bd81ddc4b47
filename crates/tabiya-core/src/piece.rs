//! Colored chess pieces.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A chess piece: a color and a kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// Create a piece from a color and a kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece letter: uppercase for White, lowercase for Black.
    pub fn letter(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Every destination this piece can reach from `from` on `board`,
    /// ignoring whether the move would leave its own king attacked.
    ///
    /// Castling and en passant are not produced here; both depend on game
    /// history and are added by [`Game::legal_moves`](crate::Game::legal_moves).
    pub fn pseudo_legal_moves(self, board: &Board, from: Position) -> Vec<Move> {
        let mut moves = Vec::new();
        match self.kind {
            PieceKind::King => movegen::gen_king(board, from, self.color, &mut moves),
            PieceKind::Knight => movegen::gen_knight(board, from, self.color, &mut moves),
            PieceKind::Pawn => movegen::gen_pawn(board, from, self.color, &mut moves),
            PieceKind::Queen => {
                movegen::gen_slider(board, from, self.color, &movegen::QUEEN_DIRECTIONS, &mut moves)
            }
            PieceKind::Rook => {
                movegen::gen_slider(board, from, self.color, &movegen::ROOK_DIRECTIONS, &mut moves)
            }
            PieceKind::Bishop => movegen::gen_slider(
                board,
                from,
                self.color,
                &movegen::BISHOP_DIRECTIONS,
                &mut moves,
            ),
        }
        moves
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.letter().to_ascii_uppercase())
    }
}
