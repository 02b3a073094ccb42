// config.rs - Command line options

use std::time::Duration;

use clap::Parser;
use conway::simulation::DEFAULT_MAX_GENERATIONS;
use conway::RANDOM_DENSITY;
use log::LevelFilter;

pub const DEFAULT_DELAY_MS: u64 = 100;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Conway's Game of Life on a wrapping terminal grid",
    long_about = None
)]
pub struct Args {
    /// Grid rows (default: whatever fits the terminal)
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<usize>,

    /// Grid columns (default: whatever fits the terminal)
    #[arg(long, value_name = "COLUMNS")]
    pub cols: Option<usize>,

    /// Pause between generations
    #[arg(long, value_name = "MILLISECONDS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Stop after this many generations if nothing was detected (at most 10000)
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_GENERATIONS)]
    pub max_generations: u64,

    /// Live-cell probability for the random pattern
    #[arg(long, value_name = "PROBABILITY", default_value_t = RANDOM_DENSITY)]
    pub density: f64,

    /// Catalog index to run instead of prompting
    #[arg(short, long, value_name = "INDEX")]
    pub pattern: Option<usize>,

    /// Seed for the random pattern, for reproducible runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Print cells without colour
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["conway_term"]).unwrap();
        assert_eq!(args.rows, None);
        assert_eq!(args.cols, None);
        assert_eq!(args.delay(), Duration::from_millis(100));
        assert_eq!(args.max_generations, 10_000);
        assert_eq!(args.density, 0.2);
        assert_eq!(args.pattern, None);
        assert_eq!(args.log_level, LevelFilter::Warn);
        assert!(!args.no_color);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "conway_term",
            "--rows", "12",
            "--cols", "30",
            "--delay-ms", "0",
            "-p", "3",
            "--seed", "99",
            "--log-level", "debug",
            "--no-color",
        ])
        .unwrap();
        assert_eq!((args.rows, args.cols), (Some(12), Some(30)));
        assert_eq!(args.delay(), Duration::ZERO);
        assert_eq!(args.pattern, Some(3));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert!(args.no_color);
    }

    #[test]
    fn test_rejects_non_numeric_pattern() {
        assert!(Args::try_parse_from(["conway_term", "--pattern", "glider"]).is_err());
        assert!(Args::try_parse_from(["conway_term", "--pattern", "-1"]).is_err());
    }
}
