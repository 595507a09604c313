#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use ship::*;
pub use ui::*;
