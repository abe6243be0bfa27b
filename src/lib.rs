//! Conway's Game of Life console simulator
//!
//! This library seeds a fixed-size grid with random live cells and renders
//! successive generations as text, advancing them with a double-buffered
//! neighbor-counting engine.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::Grid;
pub use simulation::{RunSummary, SimulationEngine, SimulationRunner};

use anyhow::Result;

/// Main entry point: run a simulation with the given settings against stdout
pub fn run_simulation(settings: Settings) -> Result<RunSummary> {
    let mut runner = SimulationRunner::new(&settings);
    let mut stdout = std::io::stdout().lock();
    runner.run(&mut stdout)
}
