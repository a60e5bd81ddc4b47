//! Chess rules engine: board representation, move generation, legality and game state.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod game;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleFlags, CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{InvalidMove, MoveParseError, PositionOutOfBounds};
pub use game::{Game, GameStatus};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
