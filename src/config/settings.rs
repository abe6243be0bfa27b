//! Configuration settings for the Game of Life console simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seeding: SeedingConfig,
    pub display: DisplayConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Probability in [0.0, 1.0] that a cell starts alive.
    pub alive_probability: f64,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Delay between rendering a generation and computing the next.
    pub frame_delay_ms: u64,
    /// Blank lines emitted between generations to clear an append-only terminal.
    pub clear_lines: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Stop after this many generations; unbounded when absent.
    pub max_generations: Option<u64>,
    pub summary_format: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Validation failures for a [`Settings`] value
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("alive probability must be within [0.0, 1.0], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("alive and dead glyphs must differ, both are {0:?}")]
    IndistinguishableGlyphs(char),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { rows: 25, cols: 80 },
            seeding: SeedingConfig {
                alive_probability: 0.15,
                seed: None,
            },
            display: DisplayConfig {
                alive_glyph: 'O',
                dead_glyph: ' ',
                frame_delay_ms: 100,
                clear_lines: 100,
            },
            run: RunConfig {
                max_generations: None,
                summary_format: SummaryFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings, failing fast on values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }

        let p = self.seeding.alive_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange(p));
        }

        if self.display.alive_glyph == self.display.dead_glyph {
            return Err(ConfigError::IndistinguishableGlyphs(self.display.alive_glyph));
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(probability) = cli_overrides.alive_probability {
            self.seeding.alive_probability = probability;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seeding.seed = Some(seed);
        }
        if let Some(delay_ms) = cli_overrides.frame_delay_ms {
            self.display.frame_delay_ms = delay_ms;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.run.max_generations = Some(max_generations);
        }
        if let Some(format) = cli_overrides.summary_format {
            self.run.summary_format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub alive_probability: Option<f64>,
    pub seed: Option<u64>,
    pub frame_delay_ms: Option<u64>,
    pub max_generations: Option<u64>,
    pub summary_format: Option<SummaryFormat>,
}
