use crate::ship::PlacementRequest;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;
/// Every ship occupies this many contiguous cells.
pub const SHIP_LENGTH: usize = 3;

/// Rendered value of an open-water cell.
pub const WATER: u8 = 0;
/// Rendered value of a cell covered by a ship.
pub const SHIP_PART: u8 = 3;

/// Environment variable read by `init_logging` for the log level.
pub const LOG_ENV: &str = "NAVAL_LOG";

pub const FLEET_SIZE: usize = 2;
pub const FLEET: [PlacementRequest; FLEET_SIZE] = [
    PlacementRequest::new("Horizontal", "first", 2, 3, 'H'),
    PlacementRequest::new("Vertical", "second", 5, 6, 'V'),
];
