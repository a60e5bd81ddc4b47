//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

use super::push_step;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate knight jumps. Intervening squares are irrelevant.
pub(crate) fn gen_knight(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    for jump in KNIGHT_JUMPS {
        push_step(board, from, color, jump, moves);
    }
}
