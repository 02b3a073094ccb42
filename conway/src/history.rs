// history.rs - Generation history with extinction and cycle detection

use std::collections::HashMap;

use log::debug;

use crate::grid::{Grid, StateKey};

/// Detector state. `Extinct` and `Looping` are terminal: once reached they
/// are reported unchanged by every later observation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Detection {
    #[default]
    Evolving,
    Extinct,
    Looping { period: u64 },
}

impl Detection {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Detection::Evolving)
    }

    /// `0` while evolving, `-1` for extinction, otherwise the period.
    pub fn cycle_length(self) -> i64 {
        match self {
            Detection::Evolving => 0,
            Detection::Extinct => -1,
            Detection::Looping { period } => period as i64,
        }
    }
}

/// First generation at which each grid state was seen.
#[derive(Debug, Default)]
pub struct History {
    seen: HashMap<StateKey, u64>,
    detection: Detection,
    detected_at: Option<u64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detection(&self) -> Detection {
        self.detection
    }

    /// Generation counter value at the observation that ended the run.
    pub fn detected_at(&self) -> Option<u64> {
        self.detected_at
    }

    /// Number of distinct states recorded so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    #[cfg(test)]
    fn first_seen(&self, grid: &Grid) -> Option<u64> {
        self.seen.get(&grid.state_key()).copied()
    }

    /// Inspects the grid of `generation`. Call once per generation, starting
    /// with the seeded grid at generation 0.
    pub fn observe(&mut self, grid: &Grid, generation: u64) -> Detection {
        if self.detection.is_terminal() {
            return self.detection;
        }

        if grid.is_all_dead() {
            debug!("population extinct at generation {generation}");
            self.finish(Detection::Extinct, generation);
            return self.detection;
        }

        // Only the first occurrence is stored, so periods are measured against it
        let key = grid.state_key();
        match self.seen.get(&key).copied() {
            Some(first) if first < generation => {
                let period = generation - first;
                debug!("state of generation {first} recurred at {generation} (period {period})");
                self.finish(Detection::Looping { period }, generation);
            }
            // Same generation observed again
            Some(_) => {}
            None => {
                self.seen.insert(key, generation);
            }
        }
        self.detection
    }

    fn finish(&mut self, detection: Detection, generation: u64) {
        self.detection = detection;
        self.detected_at = Some(generation);
    }
}
