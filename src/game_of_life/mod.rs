//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod seed;

pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use seed::{random_grid, seeded_rng};
