//! Pseudo-legal move and attack-set generation.
//!
//! Each piece kind has an attack set (the squares it attacks or defends) and
//! a list of pseudo-legal moves (moves that ignore the safety of its own
//! king). Dispatch is a single `match` on [`PieceKind`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::geometry::{ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use super::{Bitboard, Color, Move, MoveList, Piece, PieceId, PieceKind, Position, Square};

impl Position {
    /// Squares the piece attacks or defends, whether or not it could move there.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this position.
    #[must_use]
    pub fn attacks(&self, id: PieceId) -> Bitboard {
        self.attack_set(self.piece(id))
    }

    pub(crate) fn attack_set(&self, piece: &Piece) -> Bitboard {
        match piece.kind {
            PieceKind::Pawn => self.pawn_attacks(piece),
            PieceKind::Knight => self.knight_attacks(piece),
            PieceKind::Bishop => self.slider_attacks(piece.square, &DIAGONALS),
            PieceKind::Rook => self.slider_attacks(piece.square, &ORTHOGONALS),
            PieceKind::Queen => self.slider_attacks(piece.square, &ALL_DIRECTIONS),
            PieceKind::King => self.king_attacks(piece),
        }
    }

    /// Moves the piece could make, ignoring whether they expose its own king.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this position.
    #[must_use]
    pub fn pseudo_legal_moves(&self, id: PieceId) -> MoveList {
        let piece = self.piece(id);
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(piece),
            PieceKind::King => self.generate_king_moves(piece),
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.targets(piece, self.attack_set(piece))
            }
        }
    }

    /// Union of the attack sets of every live piece of `color`.
    #[must_use]
    pub fn vision(&self, color: Color) -> Bitboard {
        self.pieces(color)
            .fold(Bitboard::EMPTY, |seen, piece| seen | self.attack_set(piece))
    }

    /// Attacked squares that are empty or hold an enemy piece.
    fn targets(&self, piece: &Piece, attacks: Bitboard) -> MoveList {
        attacks
            .iter()
            .filter(|&to| self.is_enemy_or_empty(to, piece.color))
            .map(|to| Move::new(piece.square, to))
            .collect()
    }

    #[inline]
    fn is_enemy_or_empty(&self, sq: Square, color: Color) -> bool {
        self.color_on(sq) != Some(color)
    }

    #[inline]
    fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.color_on(sq) == Some(color.opponent())
    }
}
