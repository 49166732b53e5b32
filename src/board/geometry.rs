//! Board geometry: direction sets and ray casting.

use super::{Board, Square};

/// A unit step as (rank delta, file delta).
pub type Direction = (isize, isize);

pub const ORTHOGONALS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONALS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Returns true if the signed (rank, file) pair lies on the board.
#[inline]
#[must_use]
pub fn in_bounds(rank: isize, file: isize) -> bool {
    (0..8).contains(&rank) && (0..8).contains(&file)
}

/// Squares reached by repeatedly stepping in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    open: [Square; 7],
    len: usize,
    blocker: Option<Square>,
}

impl Ray {
    /// Empty squares traversed, nearest first
    #[must_use]
    pub fn open(&self) -> &[Square] {
        &self.open[..self.len]
    }

    /// First occupied square reached, if the ray did not run off the board
    #[must_use]
    pub fn blocker(&self) -> Option<Square> {
        self.blocker
    }

    /// Open squares followed by the blocker
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.open().iter().copied().chain(self.blocker)
    }
}

/// Cast a ray from `from` (exclusive) until the edge or an occupied square.
#[must_use]
pub fn cast_ray(board: &Board, from: Square, (dr, df): Direction) -> Ray {
    let mut ray = Ray {
        open: [from; 7],
        len: 0,
        blocker: None,
    };
    let mut current = from;
    while let Some(next) = current.offset(dr, df) {
        if board.is_occupied(next) {
            ray.blocker = Some(next);
            break;
        }
        ray.open[ray.len] = next;
        ray.len += 1;
        current = next;
    }
    ray
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceId;

    #[test]
    fn test_ray_to_edge() {
        let board = Board::empty();
        let ray = cast_ray(&board, Square(7, 0), (-1, 0));
        assert_eq!(ray.open().len(), 7);
        assert_eq!(ray.open()[0], Square(6, 0));
        assert_eq!(ray.blocker(), None);
    }

    #[test]
    fn test_ray_at_edge_is_empty() {
        let board = Board::empty();
        let ray = cast_ray(&board, Square(0, 0), (-1, -1));
        assert!(ray.open().is_empty());
        assert_eq!(ray.blocker(), None);
        assert_eq!(ray.squares().count(), 0);
    }

    #[test]
    fn test_ray_stops_at_blocker() {
        let mut board = Board::empty();
        board.set(Square(4, 4), Some(PieceId(0)));
        let ray = cast_ray(&board, Square(7, 7), (-1, -1));
        assert_eq!(ray.open(), &[Square(6, 6), Square(5, 5)]);
        assert_eq!(ray.blocker(), Some(Square(4, 4)));
        assert_eq!(ray.squares().count(), 3);
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 7));
        assert!(!in_bounds(-1, 3));
        assert!(!in_bounds(3, 8));
    }
}
