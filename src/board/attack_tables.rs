//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

use super::geometry::{in_bounds, Direction, ALL_DIRECTIONS, KNIGHT_OFFSETS};
use super::{Bitboard, Color, Square};

fn leaper_table(deltas: &[Direction]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (idx, slot) in attacks.iter_mut().enumerate() {
        let sq = Square::from_index(idx);
        let r = sq.rank() as isize;
        let f = sq.file() as isize;
        for &(dr, df) in deltas {
            if in_bounds(r + dr, f + df) {
                slot.insert(Square((r + dr) as usize, (f + df) as usize));
            }
        }
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&ALL_DIRECTIONS));

/// Forward-diagonal squares per color, indexed `[color][square]`.
pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        attacks[color.index()] = leaper_table(&[(dir, -1), (dir, 1)]);
    }
    attacks
});
