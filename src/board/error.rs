//! Error types for chess rules operations.

use std::fmt;

use super::{Color, PieceKind, Square};

/// Error type for rejected move requests.
///
/// A rejected request never mutates the position it was made against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not among the legal moves of the piece on `from`
    IllegalMove { from: Square, to: Square },
    /// There is no piece on the origin square
    NoPieceAtOrigin { square: Square },
    /// Promotion supplied for a non-promoting move, omitted for a promoting
    /// one, or naming a kind a pawn cannot become
    InvalidPromotionChoice {
        from: Square,
        to: Square,
        choice: Option<PieceKind>,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::NoPieceAtOrigin { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::InvalidPromotionChoice {
                from,
                to,
                choice: Some(kind),
            } => {
                write!(f, "Invalid promotion choice '{}' for {from}{to}", kind.to_char())
            }
            MoveError::InvalidPromotionChoice {
                from,
                to,
                choice: None,
            } => {
                write!(f, "Move {from}{to} requires a promotion choice")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for building a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement string has more than 8 ranks
    TooManyRanks { ranks: usize },
    /// Placement string has fewer than 8 ranks
    TooFewRanks { ranks: usize },
    /// Too many files in a rank of the placement string
    TooManyFiles { rank: usize, files: usize },
    /// A rank of the placement string does not reach file h
    TooFewFiles { rank: usize, files: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A color does not have exactly one king
    KingCount { color: Color, found: usize },
    /// A seeded last move names an empty destination square
    LastMoveWithoutPiece { square: Square },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::TooManyRanks { ranks } => {
                write!(f, "Placement has {ranks} ranks, expected at most 8")
            }
            PlacementError::TooFewRanks { ranks } => {
                write!(f, "Placement has {ranks} ranks, expected 8")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::TooFewFiles { rank, files } => {
                write!(f, "Rank {rank} covers only {files} files, expected 8")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            PlacementError::LastMoveWithoutPiece { square } => {
                write!(f, "Last move destination {square} holds no piece")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
