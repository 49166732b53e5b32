//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `PieceKind`, `Color`, `PieceId` and `Piece`
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit square set used for attack sets
//! - `Move`, `MoveRecord` and `MoveList`
//! - `CastlingRights` and `CastleSide`

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList, MoveRecord};
pub use piece::{Color, Piece, PieceId, PieceKind};
pub use square::Square;
