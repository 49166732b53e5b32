//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts on reference positions
//! - `special_moves.rs` - En passant, castling and promotion through the public API
//! - `legality.rs` - King safety filtering, idempotence and isolation
//! - `status.rs` - Check, checkmate and stalemate detection
//! - `proptest.rs` - Property-based tests over random playouts

mod perft;
mod status;

use crate::board::{Position, Square};

/// Parse a square name, panicking on bad input.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Play a sequence of coordinate moves such as `"e2e4"` or `"a7a8q"`.
///
/// # Panics
/// Panics if a move is malformed or rejected.
pub(super) fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let from = sq(&text[0..2]);
        let to = sq(&text[2..4]);
        let promotion = text[4..]
            .chars()
            .next()
            .map(|c| crate::board::PieceKind::from_char(c).unwrap());
        position
            .apply_move(from, to, promotion)
            .unwrap_or_else(|err| panic!("{text}: {err}"));
    }
}
