//! Pseudo-legal move generation, one generator per piece family.
//!
//! Generators push every geometrically reachable move onto a caller-supplied
//! vector. None of them look at check, castling or en passant.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

pub(crate) use self::king::gen_king;
pub(crate) use self::knights::gen_knight;
pub(crate) use self::pawns::gen_pawn;
pub(crate) use self::sliders::gen_slider;

/// Orthogonal ray directions as `(d_rank, d_file)`.
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal ray directions as `(d_rank, d_file)`.
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight ray directions.
pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Push a single step from `from` if it lands on the board on an empty or enemy square.
fn push_step(
    board: &Board,
    from: Position,
    color: Color,
    (d_rank, d_file): (i8, i8),
    moves: &mut Vec<Move>,
) {
    let to = from.offset(d_rank, d_file);
    if board.in_bounds(to) && (board.is_empty(to) || board.is_enemy(to, color)) {
        moves.push(Move::new(from, to));
    }
}
