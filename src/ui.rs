//! Text rendering of a board with row and column indices.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::board::Board;
use crate::config::BOARD_SIZE;

/// Write `board` in its grid form: a header of column indices, a dashed
/// separator, then one line per row of cell values.
pub fn write_board<W: Write>(board: &Board, out: &mut W) -> fmt::Result {
    out.write_str("  ")?;
    for col in 0..BOARD_SIZE {
        write!(out, "{} ", col)?;
    }
    out.write_char('\n')?;

    for _ in 0..=BOARD_SIZE {
        out.write_str("--")?;
    }
    out.write_char('\n')?;

    for row in 0..BOARD_SIZE {
        write!(out, "{}|", row)?;
        for col in 0..BOARD_SIZE {
            let cell = board.cell(row, col).map_err(|_| fmt::Error)?;
            write!(out, "{} ", cell)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Render `board` into a new string.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail and every index is in range.
    let _ = write_board(board, &mut out);
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(self, f)
    }
}
