//! Legality filtering by simulation.
//!
//! A pseudo-legal move is legal when, played on a copy of the position, it
//! leaves the mover's king outside the opponent's vision. Castling moves are
//! fully checked during generation and skip the simulation.

use super::{Color, Move, MoveList, PieceId, PieceKind, Position};

/// Legal moves of one side, grouped by piece.
///
/// Pieces appear in the order of their color's live piece list. A piece with
/// no legal move is still listed, with an empty move list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    entries: Vec<(PieceId, MoveList)>,
}

impl LegalMoves {
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &MoveList)> + '_ {
        self.entries.iter().map(|(id, moves)| (*id, moves))
    }

    /// Moves for one piece, or `None` if it is not part of this set
    #[must_use]
    pub fn moves_for(&self, id: PieceId) -> Option<&MoveList> {
        self.entries
            .iter()
            .find(|(piece, _)| *piece == id)
            .map(|(_, moves)| moves)
    }

    /// Total number of moves across all pieces
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, moves)| moves.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, moves)| moves.is_empty())
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.entries.iter().any(|(_, moves)| moves.contains(mv))
    }

    /// All moves flattened, in piece order
    pub fn all(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries
            .iter()
            .flat_map(|(_, moves)| moves.iter().copied())
    }
}

impl Position {
    /// Legal moves of every live piece of `color`.
    ///
    /// Turn order is not enforced: either color may be queried at any time.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> LegalMoves {
        let entries = self
            .piece_ids(color)
            .iter()
            .map(|&id| (id, self.legal_moves_for(id)))
            .collect();
        LegalMoves { entries }
    }

    /// Legal moves of a single piece.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this position.
    #[must_use]
    pub fn legal_moves_for(&self, id: PieceId) -> MoveList {
        let mut moves = self.pseudo_legal_moves(id);
        moves.retain(|&mv| self.is_safe_for_mover(id, mv));
        moves
    }

    fn is_safe_for_mover(&self, id: PieceId, mv: Move) -> bool {
        let piece = self.piece(id);
        if piece.kind == PieceKind::King && mv.file_distance() == 2 {
            return true;
        }

        let mut simulated = self.clone();
        simulated.execute(id, mv);
        !simulated.in_check(piece.color)
    }

    /// Whether `color`'s king is in the opponent's vision.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.vision(color.opponent())
            .contains(self.king_square(color))
    }

    /// Whether `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.piece_ids(color).iter().any(|&id| {
            self.pseudo_legal_moves(id)
                .iter()
                .any(|&mv| self.is_safe_for_mover(id, mv))
        })
    }

    /// Count leaf nodes of the legal move tree, alternating sides from `side`.
    #[must_use]
    pub fn perft(&self, side: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let legal = self.legal_moves(side);
        if depth == 1 {
            return legal.len() as u64;
        }

        let mut nodes = 0;
        for (id, moves) in legal.iter() {
            for &mv in moves {
                let mut next = self.clone();
                next.execute(id, mv);
                nodes += next.perft(side.opponent(), depth - 1);
            }
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Color, Move, PositionBuilder, Square};

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        // White bishop on e2 is pinned by the rook on e8
        let position = PositionBuilder::new()
            .placement("k3r3/8/8/8/8/8/4B3/4K3")
            .unwrap()
            .build()
            .unwrap();
        let bishop = position.piece_at(Square(6, 4)).unwrap().id;
        assert!(!position.pseudo_legal_moves(bishop).is_empty());
        assert!(position.legal_moves_for(bishop).is_empty());
    }

    #[test]
    fn test_check_must_be_answered() {
        let position = PositionBuilder::new()
            .placement("k3r3/8/8/8/8/8/3P4/4K3")
            .unwrap()
            .build()
            .unwrap();
        assert!(position.in_check(Color::White));

        let legal = position.legal_moves(Color::White);
        // only king steps off the e-file
        assert!(legal.all().all(|mv| mv.from == Square(7, 4)));
        assert!(legal.contains(&Move::new(Square(7, 4), Square(7, 3))));
        assert!(!legal.contains(&Move::new(Square(7, 4), Square(6, 4))));
    }

    #[test]
    fn test_pieces_without_moves_still_listed() {
        let position = crate::board::Position::new();
        let legal = position.legal_moves(Color::White);
        assert_eq!(legal.iter().count(), 16);
        assert_eq!(legal.len(), 20);
        let rook = position.piece_at(Square(7, 0)).unwrap().id;
        assert_eq!(legal.moves_for(rook).map(|m| m.len()), Some(0));
    }

    #[test]
    fn test_has_legal_move_agrees_with_list() {
        let position = PositionBuilder::new()
            .placement("k7/8/1Q6/8/8/8/8/7K")
            .unwrap()
            .build()
            .unwrap();
        assert!(!position.has_legal_move(Color::Black));
        assert!(position.legal_moves(Color::Black).is_empty());
        assert!(position.has_legal_move(Color::White));
    }
}
