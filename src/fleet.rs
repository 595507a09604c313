#![cfg(feature = "std")]

//! Runs a fleet plan against a fresh board and reports each step.

use std::io::Write;

use anyhow::Context;
use log::info;

use crate::board::Board;
use crate::config::FLEET;
use crate::ship::PlacementRequest;

/// Place the standard fleet and print the final board to `out`.
pub fn deploy<W: Write>(out: &mut W) -> anyhow::Result<Board> {
    deploy_requests(&FLEET, out)
}

/// Place `requests` in order on an empty board.
///
/// Stops at the first rejected request, after printing the diagnostic; the
/// board is only rendered when every ship was placed. The returned error's
/// root cause is the [`crate::PlacementError`].
pub fn deploy_requests<W: Write>(
    requests: &[PlacementRequest],
    out: &mut W,
) -> anyhow::Result<Board> {
    let mut board = Board::new();
    writeln!(out, "--- Ship Placement ---")?;

    for (i, request) in requests.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let (row, col) = request.origin();
        info!(
            "placing {} ship at ({}, {}) with flag {:?}",
            request.ordinal(),
            row,
            col,
            request.flag()
        );
        match board.place_flag(row, col, request.flag()) {
            Ok(ship) => {
                writeln!(out, "{} ship placed successfully!", request.name())?;
                for (part, (r, c)) in ship.cells().enumerate() {
                    writeln!(out, "  Part {}: ({}, {})", part + 1, r, c)?;
                }
            }
            Err(err) => {
                writeln!(out, "Error: {}.", err)?;
                writeln!(
                    out,
                    "Could not place the {} ship. Check the coordinates.",
                    request.ordinal()
                )?;
                return Err(err).with_context(|| {
                    format!("could not place the {} ship", request.ordinal())
                });
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "--- Final Board ---")?;
    write!(out, "{}", board)?;
    out.flush()?;
    info!("fleet deployed, {} ship parts on the board", board.ship_parts());
    Ok(board)
}
