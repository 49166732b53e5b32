use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Position};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// The winning color if `to_move` is checkmated
    #[must_use]
    pub const fn winner(self, to_move: Color) -> Option<Color> {
        match self {
            GameStatus::Checkmate => Some(to_move.opponent()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

impl Position {
    /// Status of the game from the point of view of `color` to move.
    ///
    /// Recomputed on every call; nothing is cached on the position.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        let status = match (self.in_check(color), self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        };
        if status != GameStatus::InProgress {
            trace_rules!("{color} to move: {status}");
        }
        status
    }
}
