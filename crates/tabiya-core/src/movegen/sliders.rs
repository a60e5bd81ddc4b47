//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

/// Cast a ray along each direction until the edge, a friendly piece
/// (excluded) or an enemy piece (included as a capture).
pub(crate) fn gen_slider(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_rank, d_file) in directions {
        let mut to = from.offset(d_rank, d_file);
        while board.in_bounds(to) {
            if board.is_empty(to) {
                moves.push(Move::new(from, to));
            } else {
                if board.is_enemy(to, color) {
                    moves.push(Move::new(from, to));
                }
                break;
            }
            to = to.offset(d_rank, d_file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gen_slider;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::test_util::{set, sq, targets};

    #[test]
    fn rook_on_empty_board() {
        let board = Board::empty();
        let mut moves = Vec::new();
        gen_slider(&board, sq("a1"), Color::White, &ROOK_DIRECTIONS, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn rays_stop_at_blockers() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::new(Color::White, PieceKind::Rook));
        board.place(sq("d6"), Piece::new(Color::Black, PieceKind::Knight));
        board.place(sq("f4"), Piece::new(Color::White, PieceKind::Pawn));
        let mut moves = Vec::new();
        gen_slider(&board, sq("d4"), Color::White, &ROOK_DIRECTIONS, &mut moves);
        assert_eq!(targets(&moves), set(&["d5", "d6", "e4", "a4", "b4", "c4", "d1", "d2", "d3"]));
    }

    #[test]
    fn bishop_diagonals() {
        let mut board = Board::empty();
        board.place(sq("b2"), Piece::new(Color::Black, PieceKind::Pawn));
        let mut moves = Vec::new();
        gen_slider(&board, sq("c1"), Color::White, &BISHOP_DIRECTIONS, &mut moves);
        assert_eq!(targets(&moves), set(&["b2", "d2", "e3", "f4", "g5", "h6"]));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = Board::empty();
        let mut moves = Vec::new();
        gen_slider(&board, sq("d4"), Color::White, &QUEEN_DIRECTIONS, &mut moves);
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn starting_queen_is_blocked() {
        let board = Board::starting_position();
        let mut moves = Vec::new();
        gen_slider(&board, sq("d1"), Color::White, &QUEEN_DIRECTIONS, &mut moves);
        assert!(moves.is_empty());
    }
}
