//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Generate pawn pushes and diagonal captures.
///
/// A move landing on the promotion rank is emitted once per promotion kind
/// and never as a plain move.
pub(crate) fn gen_pawn(board: &Board, from: Position, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    // --- Pushes ---
    let one = from.offset(dir, 0);
    if board.in_bounds(one) && board.is_empty(one) {
        push_pawn_move(from, one, color, moves);

        let two = from.offset(dir * 2, 0);
        if from.rank() == color.pawn_start_rank() && board.in_bounds(two) && board.is_empty(two) {
            push_pawn_move(from, two, color, moves);
        }
    }

    // --- Captures ---
    for d_file in [-1, 1] {
        let diag = from.offset(dir, d_file);
        if board.in_bounds(diag) && board.is_enemy(diag, color) {
            push_pawn_move(from, diag, color, moves);
        }
    }
}

fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.rank() == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promotion(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
