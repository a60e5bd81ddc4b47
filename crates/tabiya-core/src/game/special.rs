//! Castling and en passant candidates.
//!
//! Both need state beyond the board (movement flags, the previous move), so
//! they are generated here rather than by the per-piece generators.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::Game;
use super::attacks::{is_king_attacked, is_square_attacked};

/// File the king starts on.
const KING_HOME_FILE: i8 = 5;

impl Game {
    /// Castling moves available to the king of `color` standing on `from`.
    ///
    /// A side qualifies when the king is on its home square and not in check,
    /// neither that king nor the rook has moved, the rook is still on its
    /// corner, every square between them is empty and no square the king
    /// crosses or lands on is attacked.
    pub(super) fn castling_candidates(&self, from: Position, color: Color) -> Vec<Move> {
        let rank = color.back_rank();
        if from != Position::new(rank, KING_HOME_FILE) || is_king_attacked(&self.board, color) {
            return Vec::new();
        }

        let rook = Piece::new(color, PieceKind::Rook);
        CastleSide::ALL
            .into_iter()
            .filter(|&side| self.castle_rights.may_castle(color, side))
            .filter(|&side| self.board.get(Position::new(rank, side.rook_file())) == Some(rook))
            .filter(|&side| {
                side.empty_files()
                    .iter()
                    .all(|&file| self.board.is_empty(Position::new(rank, file)))
            })
            .filter(|&side| {
                side.king_path_files().iter().all(|&file| {
                    !is_square_attacked(&self.board, Position::new(rank, file), color.flip())
                })
            })
            .map(|side| Move::new(from, Position::new(rank, side.king_destination_file())))
            .collect()
    }

    /// The en passant capture for the pawn of `color` on `from`, if the previous
    /// move was an enemy pawn's double advance to an adjacent square on the same rank.
    pub(super) fn en_passant_candidate(&self, from: Position, color: Color) -> Option<Move> {
        let last = self.last_move?;
        let passed = self.board.get(last.end())?;

        if passed.kind() != PieceKind::Pawn || passed.color() == color {
            return None;
        }
        if !last.start().in_bounds() || last.rank_delta().unsigned_abs() != 2 {
            return None;
        }
        if last.end().rank() != from.rank() || last.end().file().abs_diff(from.file()) != 1 {
            return None;
        }

        let target = Position::new(from.rank() + color.pawn_direction(), last.end().file());
        Some(Move::new(from, target))
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::game::Game;
    use crate::test_util::{board_from_rows, sq};

    fn castling_game(rows: [&str; 8]) -> Game {
        let mut game = Game::new();
        game.set_board(board_from_rows(rows));
        game
    }

    const OPEN_BACK_RANKS: [&str; 8] = [
        "r...k..r",
        "pppppppp",
        "........",
        "........",
        "........",
        "........",
        "PPPPPPPP",
        "R...K..R",
    ];

    #[test]
    fn both_sides_available() {
        let game = castling_game(OPEN_BACK_RANKS);
        let moves = game.castling_candidates(sq("e1"), Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq("e1"), sq("g1"))));
        assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
    }

    #[test]
    fn king_off_home_square_never_castles() {
        let game = castling_game([
            "r...k..r",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R....K.R",
        ]);
        assert!(game.castling_candidates(sq("f1"), Color::White).is_empty());
    }

    #[test]
    fn queenside_needs_b_file_empty() {
        let game = castling_game([
            "rn..k..r",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "R...K..R",
        ]);
        let moves = game.castling_candidates(sq("e8"), Color::Black);
        assert_eq!(moves, vec![Move::new(sq("e8"), sq("g8"))]);
    }

    #[test]
    fn attacked_b_file_does_not_block_queenside() {
        // The rook on b3 attacks b1, which the king never crosses.
        let game = castling_game([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            ".r......",
            "........",
            "R...K...",
        ]);
        let moves = game.castling_candidates(sq("e1"), Color::White);
        assert_eq!(moves, vec![Move::new(sq("e1"), sq("c1"))]);
    }

    #[test]
    fn attacked_crossing_square_blocks() {
        let game = castling_game([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            ".....r..",
            "........",
            "R...K..R",
        ]);
        let moves = game.castling_candidates(sq("e1"), Color::White);
        assert_eq!(moves, vec![Move::new(sq("e1"), sq("c1"))]);
    }

    #[test]
    fn attacked_kingside_destination_blocks() {
        // The rook on g3 covers g1 only; e1 and f1 stay safe.
        let game = castling_game([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "......r.",
            "........",
            "R...K..R",
        ]);
        let moves = game.castling_candidates(sq("e1"), Color::White);
        assert_eq!(moves, vec![Move::new(sq("e1"), sq("c1"))]);
    }

    #[test]
    fn attacked_queenside_destination_blocks() {
        // The rook on c3 covers c1 only; e1 and d1 stay safe.
        let game = castling_game([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "..r.....",
            "........",
            "R...K..R",
        ]);
        let moves = game.castling_candidates(sq("e1"), Color::White);
        assert_eq!(moves, vec![Move::new(sq("e1"), sq("g1"))]);
    }

    #[test]
    fn no_castling_out_of_check() {
        let game = castling_game([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "....r...",
            "........",
            "R...K..R",
        ]);
        assert!(game.castling_candidates(sq("e1"), Color::White).is_empty());
    }

    #[test]
    fn missing_rook_blocks_side() {
        let game = castling_game([
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....K..R",
        ]);
        let moves = game.castling_candidates(sq("e1"), Color::White);
        assert_eq!(moves, vec![Move::new(sq("e1"), sq("g1"))]);
    }

    #[test]
    fn en_passant_needs_double_advance_last() {
        let mut game = Game::new();
        game.set_board(board_from_rows([
            "....k...",
            "...p....",
            "........",
            "....P...",
            "........",
            "........",
            "........",
            "....K...",
        ]));
        game.set_turn(Color::Black);
        assert_eq!(game.en_passant_candidate(sq("e5"), Color::White), None);

        game.make_move(Move::new(sq("d7"), sq("d5"))).unwrap();
        assert_eq!(
            game.en_passant_candidate(sq("e5"), Color::White),
            Some(Move::new(sq("e5"), sq("d6")))
        );
    }

    #[test]
    fn single_steps_do_not_open_en_passant() {
        let mut game = Game::new();
        game.set_board(board_from_rows([
            "....k...",
            "........",
            "...p....",
            "....P...",
            "........",
            "........",
            "........",
            "....K...",
        ]));
        game.set_turn(Color::Black);
        game.make_move(Move::new(sq("d6"), sq("d5"))).unwrap();
        assert_eq!(game.en_passant_candidate(sq("e5"), Color::White), None);
    }

    #[test]
    fn non_adjacent_pawn_gets_no_en_passant() {
        let mut game = Game::new();
        game.set_board(board_from_rows([
            "....k...",
            "...p....",
            "........",
            ".....P..",
            "........",
            "........",
            "........",
            "....K...",
        ]));
        game.set_turn(Color::Black);
        game.make_move(Move::new(sq("d7"), sq("d5"))).unwrap();
        assert_eq!(game.en_passant_candidate(sq("f5"), Color::White), None);
    }
}
