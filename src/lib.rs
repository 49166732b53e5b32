pub mod board;

pub use board::{Color, GameStatus, Move, MoveError, Piece, PieceKind, Position, Square};
