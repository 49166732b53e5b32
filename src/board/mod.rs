//! Chess position representation and rules.
//!
//! A [`Position`] owns every piece in an arena and answers rules queries:
//! attack sets, legal moves filtered by king safety, and game status.
//! Castling, en passant and promotion are handled in full.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStatus, Position};
//!
//! let position = Position::new();
//! let moves = position.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(position.status(Color::White), GameStatus::InProgress);
//! ```

/// Debug logging that compiles away unless the `logging` feature is enabled.
macro_rules! trace_rules {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($arg)+);
        }
    };
}

mod attack_tables;
mod builder;
mod error;
pub mod geometry;
mod legality;
mod make_move;
mod movegen;
pub mod prelude;
mod render;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{MoveError, PlacementError, SquareError};
pub use legality::LegalMoves;
pub use state::{Board, Position};
pub use status::GameStatus;
pub use types::{
    Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Move, MoveList, MoveRecord, Piece,
    PieceId, PieceKind, Square,
};
