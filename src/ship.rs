//! Ship footprints and the orientation flag they are placed with.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::PlacementError;
use crate::config::{BOARD_SIZE, SHIP_LENGTH};

pub type BB = BitBoard<u128, BOARD_SIZE>;

/// Axis a ship extends along from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along a row, towards higher column indices.
    Horizontal,
    /// Along a column, towards higher row indices.
    Vertical,
}

impl Orientation {
    /// Canonical single-letter flag.
    pub fn flag(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }

    pub(crate) fn adjective(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Row/column step between consecutive ship parts.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = PlacementError;

    /// Accepts `H`/`V` in either case.
    fn try_from(flag: char) -> Result<Self, Self::Error> {
        match flag.to_ascii_uppercase() {
            'H' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            _ => Err(PlacementError::InvalidOrientation(flag)),
        }
    }
}

/// A validated, in-bounds ship footprint. Overlap is checked by the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BB,
}

impl Ship {
    /// Bounds-checks a ship of `SHIP_LENGTH` starting at (`row`, `col`).
    ///
    /// The axis the ship extends along must fit `start + SHIP_LENGTH` inside
    /// the board; the other axis must be a valid index.
    pub fn new(orientation: Orientation, row: i32, col: i32) -> Result<Self, PlacementError> {
        let (along, across) = match orientation {
            Orientation::Horizontal => (col, row),
            Orientation::Vertical => (row, col),
        };
        let size = BOARD_SIZE as i64;
        let along = along as i64;
        let across = across as i64;
        if along < 0 || along + SHIP_LENGTH as i64 > size || across < 0 || across >= size {
            return Err(PlacementError::OutOfBounds {
                orientation,
                row,
                col,
            });
        }

        let (row, col) = (row as usize, col as usize);
        let (dr, dc) = orientation.step();
        let mask = BB::from_cells((0..SHIP_LENGTH).map(|i| (row + i * dr, col + i * dc)))?;
        Ok(Ship {
            orientation,
            row,
            col,
            mask,
        })
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col) = (self.row, self.col);
        let (dr, dc) = self.orientation.step();
        (0..SHIP_LENGTH).map(move |i| (row + i * dr, col + i * dc))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: ({}, {}), orientation: {:?}, length: {} }}",
            self.row, self.col, self.orientation, SHIP_LENGTH
        )
    }
}

/// One entry of a fleet plan: where to put a ship and how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    name: &'static str,
    ordinal: &'static str,
    row: i32,
    col: i32,
    flag: char,
}

impl PlacementRequest {
    pub const fn new(
        name: &'static str,
        ordinal: &'static str,
        row: i32,
        col: i32,
        flag: char,
    ) -> Self {
        Self {
            name,
            ordinal,
            row,
            col,
            flag,
        }
    }

    /// Display name, e.g. "Horizontal".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Position in the plan, e.g. "first".
    pub fn ordinal(&self) -> &'static str {
        self.ordinal
    }

    pub fn origin(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Raw orientation flag, parsed at placement time.
    pub fn flag(&self) -> char {
        self.flag
    }
}
