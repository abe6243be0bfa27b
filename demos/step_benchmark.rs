//! Throughput benchmark for the generation step
//!
//! Advances randomly seeded grids of increasing size and reports how many
//! cell updates per second the parallel evolve pass sustains.

use game_of_life_console::game_of_life::{random_grid, seeded_rng, GameOfLifeRules};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct BenchmarkResult {
    rows: usize,
    cols: usize,
    generations: u64,
    total_time: Duration,
}

impl BenchmarkResult {
    fn cells_per_second(&self) -> f64 {
        let cells = (self.rows * self.cols) as f64 * self.generations as f64;
        cells / self.total_time.as_secs_f64()
    }

    fn display(&self) -> String {
        format!(
            "{:>5} x {:<5} | {:>5} | {:>9.3}s | {:>14.0} cells/s",
            self.rows,
            self.cols,
            self.generations,
            self.total_time.as_secs_f64(),
            self.cells_per_second()
        )
    }
}

fn main() {
    println!("=== Generation Step Benchmark ===\n");
    println!(" rows x cols   | gens  | time       | throughput");
    println!("---------------+-------+------------+---------------------");

    let cases: [(usize, usize, u64); 4] = [
        (25, 80, 1000),
        (100, 100, 500),
        (500, 500, 50),
        (1000, 1000, 10),
    ];

    let mut rng = seeded_rng(Some(1));
    for (rows, cols, generations) in cases {
        let mut grid = random_grid(rows, cols, 0.15, &mut rng);

        let start = Instant::now();
        for _ in 0..generations {
            grid = GameOfLifeRules::evolve(&grid);
        }
        let total_time = start.elapsed();

        let result = BenchmarkResult {
            rows,
            cols,
            generations,
            total_time,
        };
        println!("{}", result.display());

        // Keep the evolved grid observable so the loop cannot be elided
        assert!(grid.living_count() <= rows * cols);
    }
}
