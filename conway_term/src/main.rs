// main.rs - Conway's Game of Life in the terminal
// Picks a pattern, then animates generations until extinction, a loop, or the cap.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use conway::patterns;
use conway::{SimulationConfig, SimulationState};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_logger::SimpleLogger;

mod config;    // Command line options
mod prompt;    // Pattern selection
mod runner;    // Paced generation loop
mod terminal;  // Terminal size probing
mod ui;        // Rendering

use config::Args;
use ui::{Sink, TerminalSink};

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("failed to install logger")?;

    let (rows, cols) = terminal::grid_dimensions(args.rows, args.cols);

    let seed = match args.pattern {
        Some(index) => patterns::select(index, args.density)?,
        None => {
            let stdin = io::stdin();
            prompt::choose_seed(&mut stdin.lock(), &mut io::stdout(), args.density)?
        }
    };

    let mut rng = match args.seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    };
    let config = SimulationConfig {
        rows,
        cols,
        max_generations: args.max_generations,
    };
    let mut state =
        SimulationState::new(config, &seed, &mut rng).context("failed to start simulation")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    let mut sink = TerminalSink::new(io::stdout(), !args.no_color);
    let delay = args.delay();
    let finished = runtime.block_on(async {
        tokio::select! {
            result = runner::run(&mut state, &mut sink, delay) => result.map(Some),
            _ = tokio::signal::ctrl_c() => Ok(None),
        }
    });

    // Restore the cursor even when rendering failed
    sink.finish().context("failed to restore terminal")?;
    match finished? {
        Some(outcome) => info!("run ended: {outcome:?}"),
        None => info!("interrupted at generation {}", state.generation()),
    }

    println!("Game ended.");
    Ok(())
}
