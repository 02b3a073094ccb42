// patterns.rs - Seed catalog and grid seeding

use std::iter;

use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::Grid;

/// Default live-cell probability for random seeding.
pub const RANDOM_DENSITY: f64 = 0.2;

/// Catalog label of the random seed, listed after every shaped pattern.
pub const RANDOM_NAME: &str = "Random";

/// A named shape, as `(row, col)` offsets from an anchor cell.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(-1, 0), (-1, 1), (-1, 2), (0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(-1, -1), (-1, 0), (0, -1), (0, 0), (1, 1), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Lightweight spaceship",
        cells: &[(0, 1), (0, 4), (1, 0), (2, 0), (2, 4), (3, 0), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)],
    },
    Pattern {
        name: "Diehard",
        cells: &[(-1, 2), (0, -4), (0, -3), (1, -3), (1, 1), (1, 2), (1, 3)],
    },
    Pattern {
        name: "Acorn",
        cells: &[(-1, -2), (0, 0), (1, -3), (1, -2), (1, 1), (1, 2), (1, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
            (-4, -6), (-4, -1), (-4, 1), (-4, 6),
            (-3, -6), (-3, -1), (-3, 1), (-3, 6),
            (-2, -6), (-2, -1), (-2, 1), (-2, 6),
            (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
            // Bottom half (mirrored)
            (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
            (2, -6), (2, -1), (2, 1), (2, 6),
            (3, -6), (3, -1), (3, 1), (3, 6),
            (4, -6), (4, -1), (4, 1), (4, 6),
            (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, -17), (0, -16), (1, -17), (1, -16),
            (0, -7), (1, -7), (2, -7), (-1, -6), (3, -6), (-2, -5), (4, -5),
            (-2, -4), (4, -4), (1, -3), (-1, -2), (3, -2), (0, -1), (1, -1),
            (2, -1), (1, 0), (-2, 3), (-1, 3), (0, 3), (-2, 4), (-1, 4),
            (0, 4), (-3, 5), (1, 5), (-4, 7), (-3, 7), (1, 7), (2, 7),
            (-2, 17), (-1, 17), (-2, 18), (-1, 18),
        ],
    },
];

/// How a fresh grid gets its first generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Seed {
    /// Place a catalog shape with its anchor at the grid centre.
    Shaped(&'static Pattern),
    /// Set every cell live independently with the given probability.
    Random { probability: f64 },
}

impl Seed {
    pub fn name(&self) -> &'static str {
        match self {
            Seed::Shaped(pattern) => pattern.name,
            Seed::Random { .. } => RANDOM_NAME,
        }
    }

    /// Clears `grid` and seeds it. Returns the number of live cells.
    pub fn apply<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Result<usize> {
        match *self {
            Seed::Shaped(pattern) => Ok(apply_pattern(grid, pattern)),
            Seed::Random { probability } => apply_random_pattern(grid, probability, rng),
        }
    }
}

/// Number of selectable entries: every pattern plus the random seed.
pub fn catalog_len() -> usize {
    PATTERNS.len() + 1
}

pub fn catalog_names() -> impl Iterator<Item = &'static str> {
    PATTERNS
        .iter()
        .map(|pattern| pattern.name)
        .chain(iter::once(RANDOM_NAME))
}

/// Resolves a zero-based catalog index. The last index is the random seed,
/// which uses `density` as its probability.
pub fn select(index: usize, density: f64) -> Result<Seed> {
    match PATTERNS.get(index) {
        Some(pattern) => Ok(Seed::Shaped(pattern)),
        None if index == PATTERNS.len() => Ok(Seed::Random { probability: density }),
        None => Err(Error::PatternIndexOutOfRange {
            index,
            len: catalog_len(),
        }),
    }
}

pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    // Clear grid first
    grid.clear();

    let anchor_row = (grid.rows() / 2) as i64;
    let anchor_col = (grid.cols() / 2) as i64;

    // Offsets may run past the edges and fold onto each other; count each cell once
    let mut alive = 0;
    for &(dr, dc) in pattern.cells {
        let (row, col) = grid.wrap(anchor_row + dr as i64, anchor_col + dc as i64);
        if !grid.get(row, col) {
            grid.set(row, col, true);
            alive += 1;
        }
    }
    debug!("seeded {} with {alive} live cells", pattern.name);
    alive
}

pub fn apply_random_pattern<R: Rng + ?Sized>(
    grid: &mut Grid,
    probability: f64,
    rng: &mut R,
) -> Result<usize> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::InvalidProbability(probability));
    }

    // Clear everything first
    grid.clear();

    let mut alive = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if rng.gen_bool(probability) {
                grid.set(row, col, true);
                alive += 1;
            }
        }
    }
    debug!("seeded random grid (p = {probability}) with {alive} live cells");
    Ok(alive)
}
