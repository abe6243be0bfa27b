//! Double-buffered simulation engine

use crate::config::Settings;
use crate::game_of_life::{random_grid, GameOfLifeRules, Grid};
use rand::Rng;

/// Owns the current and next generation buffers and advances the simulation
///
/// Both buffers are allocated once and live for the engine's lifetime; each
/// [`advance`](SimulationEngine::advance) computes the next generation into
/// the spare buffer and swaps the two. The buffers are never mutated while a
/// pass is reading them.
pub struct SimulationEngine {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl SimulationEngine {
    /// Create an engine holding `initial` as generation zero
    pub fn new(initial: Grid) -> Self {
        let next = Grid::new(initial.width, initial.height);
        Self {
            current: initial,
            next,
            generation: 0,
        }
    }

    /// Create an engine with a randomly seeded initial generation
    pub fn seeded<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let initial = random_grid(
            settings.grid.rows,
            settings.grid.cols,
            settings.seeding.alive_probability,
            rng,
        );
        Self::new(initial)
    }

    /// The current generation, read-only
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation
    ///
    /// Computes `next` from `current` in a read-only pass, then swaps the
    /// buffers. The only stateful mutation the engine exposes; there is no
    /// terminal state.
    pub fn advance(&mut self) {
        GameOfLifeRules::evolve_into(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }
}
