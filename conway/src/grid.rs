// grid.rs - Toroidal grid for Conway's Game of Life

use std::fmt;

use crate::error::{Error, Result};

pub const ALIVE: char = '#';
pub const DEAD: char = '.';

// Neighbor offsets around (row, col), the cell itself excluded
#[rustfmt::skip]
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Fixed-size field of cells whose edges wrap around on both axes.
///
/// Cells are stored row-major. The dimensions are set at construction and
/// never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Packed row-major bitset of a grid's cells, one bit per cell.
///
/// Two grids of the same dimensions have equal keys exactly when their
/// [`Grid::serialize`] strings are equal, so this is what the history hashes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey(Box<[u64]>);

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be at least 1, and
    /// the cell count must fit in an `isize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::GridTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside a {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Folds any signed coordinate back onto the torus.
    pub fn wrap(&self, row: i64, col: i64) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as i64) as usize,
            col.rem_euclid(self.cols as i64) as usize,
        )
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells among the eight wrapped neighbors of `(row, col)`.
    ///
    /// On an axis of length 1 an offset can wrap onto the cell itself; such
    /// positions are skipped so a cell never counts as its own neighbor.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let (nr, nc) = self.wrap(row as i64 + dr, col as i64 + dc);
            if (nr, nc) == (row, col) {
                continue;
            }
            if self.get(nr, nc) {
                count += 1;
            }
        }
        count
    }

    pub fn is_all_dead(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Full scan of the grid. The simulation keeps its own running count;
    /// this is for seeding and verification.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Canonical row-major encoding, `'1'` for live and `'0'` for dead.
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .map(|&alive| if alive { '1' } else { '0' })
            .collect()
    }

    pub fn state_key(&self) -> StateKey {
        let mut words = vec![0u64; self.cells.len().div_ceil(64)];
        for (i, _) in self.cells.iter().enumerate().filter(|(_, alive)| **alive) {
            words[i / 64] |= 1u64 << (i % 64);
        }
        StateKey(words.into_boxed_slice())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for (col, &alive) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", if alive { ALIVE } else { DEAD })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
