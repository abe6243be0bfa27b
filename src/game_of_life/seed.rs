//! Random seeding of initial generations

use super::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the RNG used for seeding
///
/// A fixed seed gives a reproducible initial generation; otherwise the RNG is
/// seeded from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Create a randomly seeded grid
///
/// Each cell is independently alive when a uniform draw in [0, 1) falls below
/// `alive_probability`. Degenerate dimensions (zero rows or columns) produce
/// an empty grid.
pub fn random_grid<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    alive_probability: f64,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::new(cols, rows);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen::<f64>() < alive_probability {
                // In-bounds by construction
                let idx = grid.index(row, col);
                grid.cells_mut()[idx] = true;
            }
        }
    }
    grid
}
