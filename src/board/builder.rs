//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, or from the piece-placement
//! field of a FEN record, rather than playing moves from the start.
//!
//! # Example
//! ```
//! use chess_rules::board::{CastleSide, Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 7), Color::White, PieceKind::Rook)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .castle(Color::White, CastleSide::Kingside)
//!     .build()
//!     .unwrap();
//! assert!(position.castling_rights().has(Color::White, CastleSide::Kingside));
//! ```

use super::error::PlacementError;
use super::{CastleSide, Color, MoveRecord, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    side_to_move: Color,
    castling: [[bool; 2]; 2],
    last_move: Option<(Square, Square)>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: [[false; 2]; 2],
            last_move: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let builder = Self::new()
            .placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .unwrap_or_default();
        builder.all_castling_rights()
    }

    /// Place pieces from a FEN piece-placement field (first rank listed is rank 8).
    ///
    /// The field must describe all eight ranks of eight files each. Pieces
    /// already placed on the listed squares are replaced.
    pub fn placement(mut self, placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() > 8 {
            return Err(PlacementError::TooManyRanks { ranks: ranks.len() });
        }

        for (rank, row) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(PlacementError::TooManyFiles {
                        rank,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                self = self.piece(Square(rank, file), color, kind);
                file += 1;
            }
            if file > 8 {
                return Err(PlacementError::TooManyFiles { rank, files: file });
            }
            if file < 8 {
                return Err(PlacementError::TooFewFiles { rank, files: file });
            }
        }
        if ranks.len() < 8 {
            return Err(PlacementError::TooFewRanks { ranks: ranks.len() });
        }

        Ok(self)
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side expected to move first.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Enable castling on one side for a color.
    ///
    /// Takes effect only if the king and the rook stand on their home squares.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling[color.index()][side.index()] = true;
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub fn all_castling_rights(mut self) -> Self {
        self.castling = [[true; 2]; 2];
        self
    }

    /// Seed the history with a move that ended on `to`, as if it had just
    /// been played. Used to set up en passant.
    #[must_use]
    pub fn last_move(mut self, from: Square, to: Square) -> Self {
        self.last_move = Some((from, to));
        self
    }

    /// Build the position.
    pub fn build(self) -> Result<Position, PlacementError> {
        for color in Color::BOTH {
            let found = self
                .pieces
                .iter()
                .filter(|&&(_, c, kind)| c == color && kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(PlacementError::KingCount { color, found });
            }
        }

        let mut position = Position::empty();
        position.first_to_move = self.side_to_move;

        for &(square, color, kind) in &self.pieces {
            let id = position.spawn(kind, color, square);
            if kind == PieceKind::King {
                position.kings[color.index()] = id;
            }
        }

        for color in Color::BOTH {
            let back = color.back_rank();
            if position.king_square(color) != Square(back, 4) {
                continue;
            }
            for side in CastleSide::BOTH {
                if !self.castling[color.index()][side.index()] {
                    continue;
                }
                let corner = Square(back, side.rook_file());
                if let Some(rook) = position.piece_at(corner) {
                    if rook.color == color && rook.kind == PieceKind::Rook {
                        let id = rook.id;
                        position.castling.grant(color, side, id);
                    }
                }
            }
        }

        if let Some((from, to)) = self.last_move {
            let piece = *position
                .piece_at(to)
                .ok_or(PlacementError::LastMoveWithoutPiece { square: to })?;
            position.history.push(MoveRecord {
                piece: piece.id,
                kind: piece.kind,
                color: piece.color,
                from,
                to,
                promotion: None,
            });
        }

        Ok(position)
    }
}
