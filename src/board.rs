//! The playing surface: a fixed grid of water and ship parts.

use core::fmt;

use log::debug;

use crate::bitboard::BitBoardError;
use crate::common::PlacementError;
use crate::config::{SHIP_PART, WATER};
use crate::ship::{Orientation, Ship, BB};

/// Contents of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    ShipPart,
}

impl Cell {
    /// Numeric value used when rendering the board.
    pub fn value(self) -> u8 {
        match self {
            Cell::Water => WATER,
            Cell::ShipPart => SHIP_PART,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Board state. Cells only ever go from water to ship part.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
}

impl Board {
    /// A board covered entirely by water.
    pub fn new() -> Self {
        Board { ship_map: BB::new() }
    }

    /// Contents of (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BitBoardError> {
        Ok(if self.ship_map.get(row, col)? {
            Cell::ShipPart
        } else {
            Cell::Water
        })
    }

    /// Number of cells holding a ship part.
    pub fn ship_parts(&self) -> usize {
        self.ship_map.count_ones()
    }

    /// Board occupancy mask of all ships.
    pub fn occupancy(&self) -> BB {
        self.ship_map
    }

    /// Place a ship at (`row`, `col`) extending along `orientation`.
    ///
    /// Bounds are checked before overlap, and nothing is written unless both
    /// checks pass. On success the placed footprint is returned.
    pub fn place(
        &mut self,
        row: i32,
        col: i32,
        orientation: Orientation,
    ) -> Result<Ship, PlacementError> {
        let ship = Ship::new(orientation, row, col).inspect_err(|e| {
            debug!("rejected placement: {}", e);
        })?;
        let overlap = self.ship_map & ship.mask();
        if let Some((r, c)) = overlap.first_set() {
            let err = PlacementError::Overlap {
                orientation,
                row: r,
                col: c,
            };
            debug!("rejected placement: {}", err);
            return Err(err);
        }
        self.ship_map |= ship.mask();
        debug!("placed {:?}", ship);
        Ok(ship)
    }

    /// Same as [`Board::place`], with the orientation given as a flag
    /// character. An unknown flag fails before any coordinate is looked at.
    pub fn place_flag(&mut self, row: i32, col: i32, flag: char) -> Result<Ship, PlacementError> {
        let orientation = Orientation::try_from(flag).inspect_err(|e| {
            debug!("rejected placement: {}", e);
        })?;
        self.place(row, col, orientation)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ ship_map: {:?} }}", self.ship_map)
    }
}
