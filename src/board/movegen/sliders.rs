use super::super::geometry::{cast_ray, Direction};
use super::super::{Bitboard, Position, Square};

impl Position {
    /// Open squares plus the first blocker along each direction. The blocker
    /// is included whatever its color.
    pub(crate) fn slider_attacks(&self, from: Square, directions: &[Direction]) -> Bitboard {
        let mut seen = Bitboard::EMPTY;
        for &dir in directions {
            for sq in cast_ray(&self.board, from, dir).squares() {
                seen.insert(sq);
            }
        }
        seen
    }
}
