// runner.rs - Paced generation loop

use std::time::Duration;

use anyhow::{Context, Result};
use conway::{Outcome, SimulationState};
use log::info;

use crate::ui::Sink;

/// Renders, stops if the run is over, waits `delay`, steps, and repeats.
/// The sleep is the only await point; the step itself never yields.
pub async fn run<S: Sink>(
    state: &mut SimulationState,
    sink: &mut S,
    delay: Duration,
) -> Result<Outcome> {
    loop {
        sink.render(&state.snapshot())
            .with_context(|| format!("failed to render generation {}", state.generation()))?;

        if let Some(outcome) = state.outcome() {
            info!(
                "{} finished at generation {}: {outcome:?}",
                state.pattern_name(),
                state.generation()
            );
            return Ok(outcome);
        }

        tokio::time::sleep(delay).await;
        state.step();
    }
}
