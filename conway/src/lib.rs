//! Conway's Game of Life (B3/S23) on a fixed-size torus, with extinction and
//! cycle detection over the generation history.

pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod rules;
pub mod simulation;
pub mod stats;

pub use error::{Error, Result};
pub use grid::{Grid, StateKey};
pub use history::{Detection, History};
pub use patterns::{Pattern, Seed, PATTERNS, RANDOM_DENSITY};
pub use rules::{advance, transition, Step, Transition};
pub use simulation::{
    Outcome, SimulationConfig, SimulationState, Snapshot, HARD_GENERATION_CAP,
};
pub use stats::Statistics;
