//! Game state: the board, the side to move, castling flags and the previous move.

mod apply;
mod attacks;
mod special;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::InvalidMove;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::apply::apply_move;
use self::attacks::is_king_attacked;

/// Check state of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// A single chess game.
///
/// [`Game::make_move`] is the only mutator that enforces the rules; every
/// other query is recomputed from the current board and side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Color,
    castle_rights: CastleRights,
    last_move: Option<Move>,
}

impl Game {
    /// Start a game from the standard opening position with White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            turn: Color::White,
            castle_rights: CastleRights::new(),
            last_move: None,
        }
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board. Castling flags and the previous move are kept as they are.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// The most recently applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Legal moves of the piece on `from`.
    ///
    /// Returns `None` if the square is empty. An occupied square whose piece
    /// cannot move yields `Some` of an empty vector. Order is unspecified.
    pub fn legal_moves(&self, from: Position) -> Option<Vec<Move>> {
        let piece = self.board.get(from)?;
        let color = piece.color();

        let mut candidates = piece.pseudo_legal_moves(&self.board, from);
        match piece.kind() {
            PieceKind::King => candidates.extend(self.castling_candidates(from, color)),
            PieceKind::Pawn => candidates.extend(self.en_passant_candidate(from, color)),
            _ => {}
        }

        candidates.retain(|&mv| !self.exposes_king(mv, color));
        Some(candidates)
    }

    /// Union of [`Game::legal_moves`] over every piece of `color`.
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .occupied(color)
            .filter_map(|(from, _)| self.legal_moves(from))
            .flatten()
            .collect()
    }

    /// Validate and play `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the origin is empty, holds a piece of the
    /// side not to move, or `mv` is not one of that piece's legal moves. The
    /// game is left untouched on error.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let piece = match self.board.get(mv.start()) {
            Some(piece) if piece.color() == self.turn => piece,
            _ => {
                debug!(%mv, turn = %self.turn, "rejected move: no piece of the side to move");
                return Err(InvalidMove);
            }
        };

        let is_legal = self
            .legal_moves(mv.start())
            .is_some_and(|moves| moves.contains(&mv));
        if !is_legal {
            debug!(%mv, turn = %self.turn, "rejected move: not legal");
            return Err(InvalidMove);
        }

        self.commit(mv);
        debug!(%mv, mover = %piece.color(), "move applied");
        Ok(())
    }

    /// Play a move already known to be legal and update the flags, the previous move and the turn.
    pub(crate) fn commit(&mut self, mv: Move) {
        let Some(piece) = apply_move(&mut self.board, mv) else {
            return;
        };

        match piece.kind() {
            PieceKind::King => self.castle_rights.mark_king_moved(piece.color()),
            PieceKind::Rook => self.castle_rights.mark_rook_moved_from(mv.start()),
            _ => {}
        }
        // A capture on a corner takes the rook that castles from there.
        self.castle_rights.mark_rook_moved_from(mv.end());

        self.last_move = Some(mv);
        self.turn = self.turn.flip();
    }

    /// Return `true` if the king of `color` is attacked. A side without a king counts as in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_attacked(&self.board, color)
    }

    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Return `true` if `color` is not in check and has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Check state of the side to move.
    pub fn status(&self) -> GameStatus {
        let in_check = self.is_in_check(self.turn);
        match (in_check, self.has_legal_move(self.turn)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .occupied(color)
            .any(|(from, _)| self.legal_moves(from).is_some_and(|moves| !moves.is_empty()))
    }

    /// Return `true` if playing `mv` on a copy of the board leaves the king of `color` attacked.
    fn exposes_king(&self, mv: Move, color: Color) -> bool {
        let mut trial = self.board.clone();
        apply_move(&mut trial, mv);
        is_king_attacked(&trial, color)
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
