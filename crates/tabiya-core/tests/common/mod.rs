//! Shared helpers for integration tests.

#![allow(dead_code)]

use tabiya_core::{Board, Color, Game, Move, Piece, PieceKind, Position};

pub fn sq(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

pub fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Build a board from eight diagram rows, rank 8 first, `.` for empty.
pub fn board_from_rows(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (i, row) in rows.iter().enumerate() {
        for (j, c) in row.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = PieceKind::from_letter(c).unwrap();
            board.place(Position::new(8 - i as i8, j as i8 + 1), Piece::new(color, kind));
        }
    }
    board
}

pub fn game_with(rows: [&str; 8], turn: Color) -> Game {
    let mut game = Game::new();
    game.set_board(board_from_rows(rows));
    game.set_turn(turn);
    game
}

/// Play `moves` in order, panicking on the first illegal one.
pub fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        if let Err(err) = game.make_move(mv(text)) {
            panic!("{text}: {err}");
        }
    }
}
