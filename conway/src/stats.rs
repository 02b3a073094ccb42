// stats.rs - Running population counters

use crate::rules::Step;

/// Births, deaths and the live population, updated as the run goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub alive: usize,
    pub births: u64,
    pub deaths: u64,
}

impl Statistics {
    /// Counters for a freshly seeded grid with `alive` live cells.
    pub fn seeded(alive: usize) -> Self {
        Self {
            alive,
            ..Self::default()
        }
    }

    pub fn record(&mut self, step: &Step) {
        self.alive = self.alive + step.births - step.deaths;
        self.births += step.births as u64;
        self.deaths += step.deaths as u64;
    }
}
