//! Configuration management for the Game of Life console simulator

pub mod settings;

pub use settings::{
    CliOverrides, ConfigError, DisplayConfig, GridConfig, RunConfig, SeedingConfig, Settings,
    SummaryFormat,
};
