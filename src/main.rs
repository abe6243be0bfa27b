//! Main CLI application for the Game of Life console simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_console::{
    config::{CliOverrides, Settings, SummaryFormat},
    game_of_life::{random_grid, seeded_rng, GameOfLifeRules},
    simulation::SimulationRunner,
    utils::{ColorOutput, GridRenderer},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_console")]
#[command(about = "Conway's Game of Life console simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation loop
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid row count (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid column count (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Initial alive probability in [0.0, 1.0] (overrides config)
        #[arg(short, long)]
        probability: Option<f64>,

        /// Stop after this many generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Delay between frames in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// RNG seed for a reproducible initial generation (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the run summary as JSON instead of text
        #[arg(long)]
        json_summary: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Seed a grid, advance it, and print the final generation once
    Preview {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// RNG seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            rows,
            cols,
            probability,
            generations,
            delay_ms,
            seed,
            json_summary,
            verbose,
        } => run_command(
            config,
            CliOverrides {
                rows,
                cols,
                alive_probability: probability,
                seed,
                frame_delay_ms: delay_ms,
                max_generations: generations,
                summary_format: json_summary.then_some(SummaryFormat::Json),
            },
            verbose,
        ),
        Commands::Preview {
            config,
            generations,
            seed,
        } => preview_command(config, generations, seed),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, cli_overrides: CliOverrides, verbose: bool) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.rows, settings.grid.cols);
        println!("  Alive probability: {}", settings.seeding.alive_probability);
        println!("  Frame delay: {}ms", settings.display.frame_delay_ms);
        match settings.run.max_generations {
            Some(limit) => println!("  Max generations: {}", limit),
            None => println!("  Max generations: unbounded"),
        }
        println!();
    }

    let mut runner = SimulationRunner::new(&settings);
    let mut stdout = std::io::stdout().lock();
    let summary = runner.run(&mut stdout)?;
    drop(stdout);

    match settings.run.summary_format {
        SummaryFormat::Text => println!("{}", ColorOutput::success(&summary.to_string())),
        SummaryFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize run summary")?
        ),
    }

    Ok(())
}

fn preview_command(config_path: PathBuf, generations: u64, seed: Option<u64>) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    if let Some(seed) = seed {
        settings.seeding.seed = Some(seed);
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut rng = seeded_rng(settings.seeding.seed);
    let initial = random_grid(
        settings.grid.rows,
        settings.grid.cols,
        settings.seeding.alive_probability,
        &mut rng,
    );
    let seeded_population = initial.living_count();
    let evolved = GameOfLifeRules::evolve_generations(initial, generations);

    let renderer = GridRenderer::new(&settings.display);
    print!("{}", renderer.format_generation(&evolved));
    println!();
    println!(
        "Generation {}: population {} (seeded with {})",
        generations,
        evolved.living_count(),
        seeded_population
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Small dense grid with a bounded run, handy for a quick smoke test
    let mut smoke = Settings::default();
    smoke.grid.rows = 10;
    smoke.grid.cols = 20;
    smoke.seeding.alive_probability = 0.4;
    smoke.display.clear_lines = 10;
    smoke.run.max_generations = Some(100);
    smoke.to_file(&examples_dir.join("smoke.yaml"))?;

    // Fixed seed and a slower frame rate for watching a reproducible run
    let mut deterministic = Settings::default();
    deterministic.seeding.seed = Some(42);
    deterministic.display.frame_delay_ms = 250;
    deterministic.to_file(&examples_dir.join("deterministic.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(&[
            "game_of_life_console",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--seed",
            "42",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parsing_preview() {
        let cli = Cli::try_parse_from(&["game_of_life_console", "preview", "-g", "10"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/smoke.yaml").exists());

        // The generated default config loads back cleanly
        let loaded = Settings::from_file(&temp_dir.path().join("config/default.yaml")).unwrap();
        assert!(loaded.validate().is_ok());
    }
}
