use conway::patterns::{catalog_len, select};
use conway::{
    Detection, Grid, Outcome, Pattern, Seed, SimulationConfig, SimulationState, HARD_GENERATION_CAP,
    PATTERNS,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pattern(name: &str) -> &'static Pattern {
    PATTERNS
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("no pattern named {name}"))
}

fn start(config: SimulationConfig, seed: &Seed, rng_seed: u64) -> SimulationState {
    SimulationState::new(config, seed, &mut StdRng::seed_from_u64(rng_seed)).unwrap()
}

fn run_pattern(name: &str, rows: usize, cols: usize) -> SimulationState {
    let config = SimulationConfig {
        rows,
        cols,
        ..SimulationConfig::default()
    };
    let mut state = start(config, &Seed::Shaped(pattern(name)), 1);
    state.run();
    state
}

#[test]
fn single_cell_goes_extinct() {
    let mut grid = Grid::new(10, 10).unwrap();
    grid.set(4, 7, true);
    let mut state = SimulationState::from_grid(grid, 100, "Single cell");
    assert_eq!(state.stats().alive, 1);

    assert!(state.advance());
    assert_eq!(state.stats().alive, 0);
    assert_eq!(state.stats().deaths, 1);
    assert_eq!(state.cycle_length(), 0);

    assert_eq!(state.detect(), Detection::Extinct);
    assert_eq!(state.cycle_length(), -1);
    assert_eq!(state.detected_at(), Some(1));
    assert_eq!(state.outcome(), Some(Outcome::Extinct));

    // Extinction is terminal
    for _ in 0..3 {
        state.advance();
        state.detect();
        assert_eq!(state.cycle_length(), -1);
    }
    assert_eq!(state.detected_at(), Some(1));
}

#[test]
fn block_is_a_still_life() {
    let config = SimulationConfig {
        rows: 12,
        cols: 12,
        ..SimulationConfig::default()
    };
    let mut state = start(config, &Seed::Shaped(pattern("Block")), 1);
    let before = state.grid().clone();

    assert!(state.advance());
    assert_eq!(state.grid(), &before);
    assert_eq!(state.grid().serialize(), before.serialize());
    assert_eq!((state.stats().births, state.stats().deaths), (0, 0));

    assert_eq!(state.detect(), Detection::Looping { period: 1 });
    assert_eq!(state.cycle_length(), 1);
}

#[test]
fn blinker_has_period_two() {
    let state = run_pattern("Blinker", 11, 11);
    assert_eq!(state.cycle_length(), 2);
    assert_eq!(state.generation(), 2);
    assert_eq!(state.detected_at(), Some(2));
    assert_eq!(state.stats().alive, 3);
}

#[test]
fn oscillators_report_their_period() {
    assert_eq!(run_pattern("Toad", 12, 12).cycle_length(), 2);
    assert_eq!(run_pattern("Beacon", 12, 12).cycle_length(), 2);
    assert_eq!(run_pattern("Pulsar", 25, 25).cycle_length(), 3);
}

#[test]
fn glider_loops_around_the_torus() {
    // One diagonal cell every four generations brings it home after 4 * 8
    let state = run_pattern("Glider", 8, 8);
    assert_eq!(state.outcome(), Some(Outcome::Looping { period: 32 }));
    assert_eq!(state.stats().alive, 5);
}

#[test]
fn generation_cap_is_an_outcome() {
    let config = SimulationConfig {
        rows: 40,
        cols: 40,
        max_generations: 25,
    };
    let mut state = start(config, &Seed::Shaped(pattern("R-pentomino")), 1);
    assert_eq!(state.run(), Outcome::GenerationCap);
    assert_eq!(state.generation(), 25);
    assert_eq!(state.cycle_length(), 0);
    assert_eq!(state.detected_at(), None);
    assert_eq!(state.snapshot().outcome, Some(Outcome::GenerationCap));
}

#[test]
fn requested_limit_is_held_to_the_hard_cap() {
    let config = SimulationConfig {
        max_generations: u64::MAX,
        ..SimulationConfig::default()
    };
    let state = start(config, &Seed::Shaped(pattern("Glider")), 1);
    assert_eq!(state.max_generations(), HARD_GENERATION_CAP);

    // Stepping an extinct grid by hand never reaches a detected outcome
    let mut state = SimulationState::from_grid(Grid::new(4, 4).unwrap(), u64::MAX, "Empty");
    let mut steps = 0_u64;
    while state.advance() {
        steps += 1;
    }
    assert_eq!(steps, HARD_GENERATION_CAP);
    assert_eq!(state.generation(), HARD_GENERATION_CAP);
}

#[test]
fn generation_counter_increases_by_one() {
    let config = SimulationConfig {
        rows: 30,
        cols: 30,
        max_generations: 40,
    };
    let mut state = start(config, &Seed::Shaped(pattern("Acorn")), 1);
    for expected in 1..=40 {
        assert!(state.advance());
        assert_eq!(state.generation(), expected);
    }
    assert!(!state.advance());
    assert_eq!(state.generation(), 40);
}

#[test]
fn empty_random_seed_is_extinct_at_start() {
    let seed = Seed::Random { probability: 0.0 };
    let state = start(SimulationConfig::default(), &seed, 1);
    assert_eq!(state.outcome(), Some(Outcome::Extinct));
    assert_eq!(state.detected_at(), Some(0));
}

#[test]
fn every_catalog_entry_can_be_seeded() {
    for index in 0..catalog_len() {
        let seed = select(index, 0.3).unwrap();
        let state = start(SimulationConfig::default(), &seed, index as u64);
        assert_eq!(state.stats().alive, state.grid().live_count(), "{}", seed.name());
    }
    assert!(select(catalog_len(), 0.3).is_err());
}

proptest! {
    #[test]
    fn random_runs_end_with_consistent_counters(
        rows in 1..12_usize,
        cols in 1..12_usize,
        density in 0.0..=1.0_f64,
        rng_seed in any::<u64>(),
    ) {
        let config = SimulationConfig { rows, cols, max_generations: 500 };
        let seed = Seed::Random { probability: density };
        let mut state = start(config, &seed, rng_seed);
        let outcome = state.run();

        prop_assert_eq!(state.stats().alive, state.grid().live_count());
        prop_assert!(state.generation() <= 500);
        match outcome {
            Outcome::Extinct => prop_assert!(state.grid().is_all_dead()),
            Outcome::Looping { period } => {
                prop_assert!(period >= 1);
                prop_assert_eq!(state.cycle_length(), period as i64);
            }
            Outcome::GenerationCap => prop_assert_eq!(state.generation(), 500),
        }
    }

    #[test]
    fn serialization_distinguishes_grids(
        cells_a in proptest::collection::vec(any::<bool>(), 35),
        cells_b in proptest::collection::vec(any::<bool>(), 35),
    ) {
        let build = |cells: &[bool]| {
            let mut grid = Grid::new(5, 7).unwrap();
            for (i, &alive) in cells.iter().enumerate() {
                grid.set(i / 7, i % 7, alive);
            }
            grid
        };
        let a = build(&cells_a[..]);
        let b = build(&cells_b[..]);
        prop_assert_eq!(a.serialize() == b.serialize(), cells_a == cells_b);
        prop_assert_eq!(a.state_key() == b.state_key(), cells_a == cells_b);
        prop_assert_eq!(a.serialize(), build(&cells_a[..]).serialize());
    }
}
