//! Attack and check detection.
//!
//! Everything here is answered from pseudo-legal move generation alone, so
//! it never recurses into the legality filter.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Return `true` if the king of `color` is attacked on `board`.
///
/// A board without a king of `color` counts as in check.
pub(crate) fn is_king_attacked(board: &Board, color: Color) -> bool {
    match board.king_position(color) {
        Some(king) => reaches(board, king, color.flip()),
        None => true,
    }
}

/// Return `true` if any piece of `by` attacks `target`.
///
/// Pawns capture diagonally only onto occupied squares and never capture by
/// pushing, so an empty `target` is probed with a stand-in piece of the
/// defending side before the scan.
pub(crate) fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    if board.is_empty(target) {
        let mut probed = board.clone();
        probed.place(target, Piece::new(by.flip(), PieceKind::Pawn));
        return reaches(&probed, target, by);
    }
    reaches(board, target, by)
}

/// Return `true` if some pseudo-legal move of a `by` piece ends on `target`.
fn reaches(board: &Board, target: Position, by: Color) -> bool {
    board.occupied(by).any(|(from, piece)| {
        piece
            .pseudo_legal_moves(board, from)
            .iter()
            .any(|mv| mv.end() == target)
    })
}
