//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, PieceId};

/// Which rook a castling move uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }

    /// File of the rook's starting corner
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_destination_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File the rook lands on (also the square the king passes through)
    #[inline]
    #[must_use]
    pub const fn rook_destination_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Side implied by a king landing on `file`, if any
    #[must_use]
    pub const fn from_king_destination(file: usize) -> Option<CastleSide> {
        match file {
            6 => Some(CastleSide::Kingside),
            2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Castling state per color.
///
/// One flag per color, cleared for good once that color's king moves, plus the
/// set of that color's original rooks that are still eligible. A rook leaves
/// the set when it moves or is captured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    allowed: [bool; 2],
    rooks: [[Option<PieceId>; 2]; 2],
}

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights {
            allowed: [false; 2],
            rooks: [[None; 2]; 2],
        }
    }

    /// Whether `color` may still castle at all
    #[inline]
    #[must_use]
    pub const fn allows(&self, color: Color) -> bool {
        self.allowed[color.index()]
    }

    /// Whether `color` may still castle on `side`
    #[inline]
    #[must_use]
    pub const fn has(&self, color: Color, side: CastleSide) -> bool {
        self.allows(color) && self.rooks[color.index()][side.index()].is_some()
    }

    /// The rook still eligible for castling on `side`, if any
    #[inline]
    #[must_use]
    pub const fn eligible_rook(&self, color: Color, side: CastleSide) -> Option<PieceId> {
        self.rooks[color.index()][side.index()]
    }

    pub(crate) fn grant(&mut self, color: Color, side: CastleSide, rook: PieceId) {
        self.allowed[color.index()] = true;
        self.rooks[color.index()][side.index()] = Some(rook);
    }

    /// Clear the color's flag. Returns true if it was set.
    pub(crate) fn revoke(&mut self, color: Color) -> bool {
        std::mem::replace(&mut self.allowed[color.index()], false)
    }

    /// Drop `rook` from the eligible set. Returns true if it was tracked.
    pub(crate) fn drop_rook(&mut self, color: Color, rook: PieceId) -> bool {
        let mut dropped = false;
        for slot in &mut self.rooks[color.index()] {
            if *slot == Some(rook) {
                *slot = None;
                dropped = true;
            }
        }
        dropped
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut any = false;
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.has(color, side) {
                    let c = match side {
                        CastleSide::Kingside => 'k',
                        CastleSide::Queenside => 'q',
                    };
                    let c = if color == Color::White {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    };
                    write!(f, "{c}")?;
                    any = true;
                }
            }
        }
        if !any {
            write!(f, "-")?;
        }
        Ok(())
    }
}
