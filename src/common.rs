//! Placement errors shared by the board and the driver.

use crate::bitboard::BitBoardError;
use crate::ship::Orientation;

/// Why a placement was rejected. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The ship would extend past an edge of the board.
    OutOfBounds {
        orientation: Orientation,
        row: i32,
        col: i32,
    },
    /// A target cell already holds part of another ship.
    Overlap {
        orientation: Orientation,
        row: usize,
        col: usize,
    },
    /// The orientation flag is not one of `H`, `h`, `V`, `v`.
    InvalidOrientation(char),
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for PlacementError {
    fn from(err: BitBoardError) -> Self {
        PlacementError::BitBoardError(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds { orientation, row, col } => write!(
                f,
                "{} ship at ({}, {}) is out of the board bounds",
                orientation.adjective(),
                row,
                col
            ),
            PlacementError::Overlap { orientation, row, col } => write!(
                f,
                "{} ship overlaps another ship at ({}, {})",
                orientation.adjective(),
                row,
                col
            ),
            PlacementError::InvalidOrientation(flag) => write!(
                f,
                "invalid ship orientation {:?}, use 'H' for horizontal or 'V' for vertical",
                flag
            ),
            PlacementError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::BitBoardError(e) => Some(e),
            _ => None,
        }
    }
}
