//! King move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

use super::{QUEEN_DIRECTIONS, push_step};

/// Generate the king's single steps onto empty or enemy squares.
pub(crate) fn gen_king(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    for dir in QUEEN_DIRECTIONS {
        push_step(board, from, color, dir, moves);
    }
}
