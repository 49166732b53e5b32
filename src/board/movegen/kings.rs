use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, CastleSide, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn king_attacks(&self, king: &Piece) -> Bitboard {
        KING_ATTACKS[king.square.as_index()]
    }

    pub(crate) fn generate_king_moves(&self, king: &Piece) -> MoveList {
        let mut moves = self.targets(king, self.king_attacks(king));
        moves.extend(self.castling_moves(king));
        moves
    }

    /// Castling moves, fully validated here rather than by simulation:
    /// rights kept, original rook still home and eligible, the squares
    /// between king and rook empty, and the king's square, the square it
    /// passes through and its destination all unattacked.
    fn castling_moves(&self, king: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let color = king.color;
        let back = color.back_rank();

        if !self.castling.allows(color) || king.square != Square(back, 4) {
            return moves;
        }

        let mut enemy_vision: Option<Bitboard> = None;
        for side in CastleSide::BOTH {
            let Some(rook) = self.castling.eligible_rook(color, side) else {
                continue;
            };
            let corner = Square(back, side.rook_file());
            if self.board.get(corner) != Some(rook) {
                continue;
            }

            let (low, high) = if side.rook_file() < 4 {
                (side.rook_file() + 1, 4)
            } else {
                (5, side.rook_file())
            };
            if (low..high).any(|file| self.board.is_occupied(Square(back, file))) {
                continue;
            }

            let seen = *enemy_vision.get_or_insert_with(|| self.vision(color.opponent()));
            let transit = [
                king.square,
                Square(back, side.rook_destination_file()),
                Square(back, side.king_destination_file()),
            ];
            if transit.iter().any(|&sq| seen.contains(sq)) {
                continue;
            }

            moves.push(Move::new(
                king.square,
                Square(back, side.king_destination_file()),
            ));
        }

        moves
    }
}
