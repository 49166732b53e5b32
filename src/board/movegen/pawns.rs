use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Move, MoveList, Piece, PieceKind, Position, Square};

impl Position {
    pub(crate) fn pawn_attacks(&self, pawn: &Piece) -> Bitboard {
        PAWN_ATTACKS[pawn.color.index()][pawn.square.as_index()]
    }

    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        let color = pawn.color;
        let from = pawn.square;
        let dir = color.pawn_direction();

        for to in self.pawn_attacks(pawn) {
            if self.is_enemy(to, color) {
                push_pawn_move(&mut moves, pawn, to);
            }
        }

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(&mut moves, pawn, one);

                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        if let Some(target) = self.en_passant_target(pawn) {
            moves.push(Move::new(from, target));
        }

        moves
    }

    /// The square this pawn may capture onto en passant, if any.
    ///
    /// Only the most recent move is consulted: it must be an enemy pawn's
    /// two-square advance landing beside this pawn, and the square it passed
    /// over must be in this pawn's attack set.
    pub(crate) fn en_passant_target(&self, pawn: &Piece) -> Option<Square> {
        let last = self.last_move()?;
        let enemy = pawn.color.opponent();

        if pawn.square.rank() != enemy.double_push_rank()
            || last.color != enemy
            || !last.is_double_pawn_push()
        {
            return None;
        }

        let passed = Square((last.from.rank() + last.to.rank()) / 2, last.to.file());
        self.pawn_attacks(pawn).contains(passed).then_some(passed)
    }
}

/// Push a pawn move, expanding it into one move per promotion choice on
/// the farthest rank.
fn push_pawn_move(moves: &mut MoveList, pawn: &Piece, to: Square) {
    if to.rank() == pawn.color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(pawn.square, to, kind));
        }
    } else {
        moves.push(Move::new(pawn.square, to));
    }
}
