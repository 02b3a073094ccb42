// rules.rs - B3/S23 transition rule and the generation step

use crate::grid::Grid;

/// What happens to one cell between two generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Survive,
    Die,
    Birth,
    StayDead,
}

impl Transition {
    pub fn is_alive(self) -> bool {
        matches!(self, Transition::Survive | Transition::Birth)
    }
}

/// Conway's rule for a cell with `neighbors` live neighbors.
#[inline]
pub fn transition(alive: bool, neighbors: u8) -> Transition {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => Transition::Survive,  // Survival
        (true, _)             => Transition::Die,      // Under- or overpopulation
        (false, 3)            => Transition::Birth,    // Reproduction
        (false, _)            => Transition::StayDead,
    }
}

/// Result of advancing a grid by one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub grid: Grid,
    pub births: usize,
    pub deaths: usize,
}

/// Computes the next generation. Every neighbor count is read from `grid`,
/// which is left untouched; the new cells go into a fresh grid.
pub fn advance(grid: &Grid) -> Step {
    let mut next = grid.clone();
    let mut births = 0;
    let mut deaths = 0;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let next_state = transition(grid.get(row, col), grid.neighbor_count(row, col));
            match next_state {
                Transition::Die => deaths += 1,
                Transition::Birth => births += 1,
                Transition::Survive | Transition::StayDead => {}
            }
            next.set(row, col, next_state.is_alive());
        }
    }

    Step { grid: next, births, deaths }
}
