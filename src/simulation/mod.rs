//! Stateful simulation engine and the presentation loop around it

pub mod engine;
pub mod runner;

pub use engine::SimulationEngine;
pub use runner::{RunSummary, SimulationRunner, StopReason};
