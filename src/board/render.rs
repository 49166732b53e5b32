//! Read-only views of the board for display layers.

use super::{Piece, Position, Square};

impl Position {
    /// Every square with its occupant, rank "8" first and file 'a' first
    /// within a rank.
    #[must_use]
    pub fn render(&self) -> Vec<(Square, Option<Piece>)> {
        Square::all()
            .map(|sq| (sq, self.piece_at(sq).copied()))
            .collect()
    }

    /// The piece-placement field of a FEN record.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}
