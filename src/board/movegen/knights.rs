use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Piece, Position};

impl Position {
    pub(crate) fn knight_attacks(&self, knight: &Piece) -> Bitboard {
        KNIGHT_ATTACKS[knight.square.as_index()]
    }
}
