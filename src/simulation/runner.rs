//! Presentation loop driving the engine

use crate::config::Settings;
use crate::game_of_life::seeded_rng;
use crate::simulation::SimulationEngine;
use crate::utils::GridRenderer;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Why a bounded run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    StopRequested,
    GenerationLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::StopRequested => write!(f, "stop requested"),
            StopReason::GenerationLimit => write!(f, "generation limit reached"),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generations: u64,
    pub final_population: usize,
    pub stop_reason: StopReason,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ran {} generation(s), final population {}, stopped: {}",
            self.generations, self.final_population, self.stop_reason
        )
    }
}

/// Drives the render / wait / clear / advance loop around a [`SimulationEngine`]
///
/// Timing and screen clearing live here, not in the engine; the engine never
/// waits on the presentation layer.
pub struct SimulationRunner {
    engine: SimulationEngine,
    renderer: GridRenderer,
    frame_delay: Duration,
    max_generations: Option<u64>,
    stop: Arc<AtomicBool>,
}

impl SimulationRunner {
    /// Seed a fresh engine from the settings and wrap it in a runner
    pub fn new(settings: &Settings) -> Self {
        let mut rng = seeded_rng(settings.seeding.seed);
        let engine = SimulationEngine::seeded(settings, &mut rng);
        Self::with_engine(engine, settings)
    }

    /// Wrap an existing engine, taking presentation settings from `settings`
    pub fn with_engine(engine: SimulationEngine, settings: &Settings) -> Self {
        Self {
            engine,
            renderer: GridRenderer::new(&settings.display),
            frame_delay: Duration::from_millis(settings.display.frame_delay_ms),
            max_generations: settings.run.max_generations,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for requesting a cooperative stop
    ///
    /// The flag is checked once per tick boundary, never mid-pass.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Run until a stop condition is met
    ///
    /// Each tick renders the current generation, waits the frame delay, emits
    /// the blank-line screen clear, then advances. With no generation limit
    /// and no stop request the loop never returns.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        loop {
            self.renderer
                .write_generation(self.engine.current(), out)
                .context("Failed to render generation")?;
            out.flush().context("Failed to flush console output")?;

            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }

            self.renderer
                .write_clear(out)
                .context("Failed to clear console")?;

            if let Some(reason) = self.stop_reason() {
                return Ok(RunSummary {
                    generations: self.engine.generation(),
                    final_population: self.engine.current().living_count(),
                    stop_reason: reason,
                });
            }

            self.engine.advance();
        }
    }

    fn stop_reason(&self) -> Option<StopReason> {
        if self.stop.load(Ordering::Relaxed) {
            return Some(StopReason::StopRequested);
        }
        match self.max_generations {
            Some(limit) if self.engine.generation() >= limit => Some(StopReason::GenerationLimit),
            _ => None,
        }
    }
}
