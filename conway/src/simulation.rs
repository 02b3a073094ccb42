// simulation.rs - Owned simulation state driven one generation at a time

use log::{debug, info, warn};
use rand::Rng;

use crate::error::Result;
use crate::grid::Grid;
use crate::history::{Detection, History};
use crate::patterns::Seed;
use crate::rules;
use crate::stats::Statistics;

pub const DEFAULT_ROWS: usize = 40;
pub const DEFAULT_COLS: usize = 40;
/// Ceiling on every run, whatever limit the caller asks for.
pub const HARD_GENERATION_CAP: u64 = 10_000;
pub const DEFAULT_MAX_GENERATIONS: u64 = HARD_GENERATION_CAP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Requested ceiling on the generation counter. Values above
    /// [`HARD_GENERATION_CAP`] are lowered to it.
    pub max_generations: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            max_generations: DEFAULT_MAX_GENERATIONS,
        }
    }
}

/// Why a run is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Extinct,
    Looping { period: u64 },
    /// The generation ceiling was hit before anything was detected.
    GenerationCap,
}

/// Read-only view handed to renderers each generation.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub generation: u64,
    pub alive_count: usize,
    pub total_births: u64,
    pub total_deaths: u64,
    /// `0` while evolving, `-1` after extinction, otherwise the period.
    pub cycle_length: i64,
    pub pattern_name: &'static str,
    pub detected_at: Option<u64>,
    pub outcome: Option<Outcome>,
}

/// One independent run: the grid, its counters and its history.
#[derive(Debug)]
pub struct SimulationState {
    grid: Grid,
    generation: u64,
    stats: Statistics,
    history: History,
    max_generations: u64,
    pattern_name: &'static str,
}

impl SimulationState {
    /// Builds the grid, seeds it and records the seeded state as generation 0.
    pub fn new<R: Rng + ?Sized>(
        config: SimulationConfig,
        seed: &Seed,
        rng: &mut R,
    ) -> Result<Self> {
        let mut grid = Grid::new(config.rows, config.cols)?;
        let alive = seed.apply(&mut grid, rng)?;
        info!(
            "seeded {}x{} grid with {} ({alive} live cells)",
            config.rows,
            config.cols,
            seed.name()
        );
        Ok(Self::start(grid, alive, config.max_generations, seed.name()))
    }

    /// Starts a run from an arbitrary grid. The live count is taken from a
    /// full scan here and maintained incrementally afterwards.
    pub fn from_grid(grid: Grid, max_generations: u64, pattern_name: &'static str) -> Self {
        let alive = grid.live_count();
        Self::start(grid, alive, max_generations, pattern_name)
    }

    fn start(grid: Grid, alive: usize, max_generations: u64, pattern_name: &'static str) -> Self {
        if max_generations > HARD_GENERATION_CAP {
            warn!("generation limit {max_generations} lowered to {HARD_GENERATION_CAP}");
        }
        let mut state = Self {
            grid,
            generation: 0,
            stats: Statistics::seeded(alive),
            history: History::new(),
            max_generations: max_generations.min(HARD_GENERATION_CAP),
            pattern_name,
        };
        state.detect();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> Statistics {
        self.stats
    }

    pub fn detection(&self) -> Detection {
        self.history.detection()
    }

    pub fn cycle_length(&self) -> i64 {
        self.history.detection().cycle_length()
    }

    pub fn detected_at(&self) -> Option<u64> {
        self.history.detected_at()
    }

    pub fn pattern_name(&self) -> &'static str {
        self.pattern_name
    }

    pub fn max_generations(&self) -> u64 {
        self.max_generations
    }

    /// Replaces the grid with its next generation and updates the counters.
    /// Returns `false`, changing nothing, once the generation ceiling is hit.
    pub fn advance(&mut self) -> bool {
        if self.generation >= self.max_generations {
            return false;
        }
        let step = rules::advance(&self.grid);
        self.stats.record(&step);
        self.grid = step.grid;
        self.generation += 1;
        debug!(
            "generation {}: {} alive (+{} -{})",
            self.generation, self.stats.alive, step.births, step.deaths
        );
        true
    }

    /// Runs the detector on the current generation.
    pub fn detect(&mut self) -> Detection {
        self.history.observe(&self.grid, self.generation)
    }

    /// Advances and detects, unless the run is already over.
    /// Returns the outcome once there is one.
    pub fn step(&mut self) -> Option<Outcome> {
        if self.outcome().is_none() && self.advance() {
            self.detect();
        }
        let outcome = self.outcome();
        if let Some(outcome) = outcome {
            debug!("run over at generation {}: {outcome:?}", self.generation);
        }
        outcome
    }

    /// Steps until extinction, a cycle or the generation ceiling.
    pub fn run(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.step() {
                info!(
                    "{} finished at generation {}: {outcome:?}",
                    self.pattern_name, self.generation
                );
                return outcome;
            }
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.history.detection() {
            Detection::Extinct => Some(Outcome::Extinct),
            Detection::Looping { period } => Some(Outcome::Looping { period }),
            Detection::Evolving if self.generation >= self.max_generations => {
                Some(Outcome::GenerationCap)
            }
            Detection::Evolving => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            generation: self.generation,
            alive_count: self.stats.alive,
            total_births: self.stats.births,
            total_deaths: self.stats.deaths,
            cycle_length: self.cycle_length(),
            pattern_name: self.pattern_name,
            detected_at: self.detected_at(),
            outcome: self.outcome(),
        }
    }
}
