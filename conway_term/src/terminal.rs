// terminal.rs - Fit the grid to the terminal window

use conway::simulation::{DEFAULT_COLS, DEFAULT_ROWS};
use crossterm::terminal;
use log::{debug, warn};

/// Lines under the grid: three status lines plus one for the cursor.
pub const STATUS_LINES: u16 = 4;

/// Each cell prints as a glyph and a space.
pub const COLUMNS_PER_CELL: u16 = 2;

/// Largest grid that fits a `width` x `height` terminal, if any does.
pub fn fit(width: u16, height: u16) -> Option<(usize, usize)> {
    let rows = height.saturating_sub(STATUS_LINES) as usize;
    let cols = (width / COLUMNS_PER_CELL) as usize;
    (rows > 0 && cols > 0).then_some((rows, cols))
}

/// Grid size from explicit overrides, else the terminal, else 40x40.
pub fn grid_dimensions(rows: Option<usize>, cols: Option<usize>) -> (usize, usize) {
    if let (Some(rows), Some(cols)) = (rows, cols) {
        return (rows, cols);
    }

    let measured = match terminal::size() {
        Ok((width, height)) => {
            debug!("terminal is {width}x{height}");
            fit(width, height)
        }
        Err(err) => {
            warn!("could not read terminal size: {err}");
            None
        }
    };
    let (fit_rows, fit_cols) = measured.unwrap_or_else(|| {
        warn!("falling back to a {DEFAULT_ROWS}x{DEFAULT_COLS} grid");
        (DEFAULT_ROWS, DEFAULT_COLS)
    });
    (rows.unwrap_or(fit_rows), cols.unwrap_or(fit_cols))
}
