//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status(Color::White), GameStatus::InProgress);
//! ```

pub use super::{
    Color, GameStatus, LegalMoves, Move, MoveError, MoveList, MoveRecord, Piece, PieceKind,
    Position, PositionBuilder, Square, SquareError,
};
