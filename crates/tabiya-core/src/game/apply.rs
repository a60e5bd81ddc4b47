//! Board mutation for a single move, shared by trial simulation and live play.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Play `mv` on `board` and return the piece that moved.
///
/// Handles the side effects a [`Move`] does not spell out: the rook hop of a
/// castle (king striding two files), removal of the pawn taken en passant
/// (pawn moving diagonally onto an empty square), and promotion substitution.
/// Performs no legality checks. Returns `None` and leaves the board untouched
/// if `mv.start()` is empty.
pub(crate) fn apply_move(board: &mut Board, mv: Move) -> Option<Piece> {
    let piece = board.get(mv.start())?;

    match piece.kind() {
        PieceKind::King => {
            if let Some(side) = CastleSide::from_king_stride(mv.file_delta()) {
                let rank = mv.start().rank();
                if let Some(rook) = board.remove(Position::new(rank, side.rook_file())) {
                    board.place(Position::new(rank, side.rook_destination_file()), rook);
                }
            }
        }
        PieceKind::Pawn => {
            if mv.file_delta() != 0 && board.is_empty(mv.end()) {
                board.remove(Position::new(mv.start().rank(), mv.end().file()));
            }
        }
        _ => {}
    }

    let placed = match mv.promotion_kind() {
        Some(kind) if piece.kind() == PieceKind::Pawn => Piece::new(piece.color(), kind),
        _ => piece,
    };
    board.place(mv.end(), placed);
    board.remove(mv.start());

    Some(piece)
}
