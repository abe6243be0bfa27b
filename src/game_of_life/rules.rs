//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a single cell from its current state and live neighbor count
    ///
    /// One exhaustive match covers every (state, count) pair, so no
    /// combination can be double-assigned or left unset.
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, n) if n < 2 => false,  // underpopulation
            (true, 2) | (true, 3) => true, // survival
            (true, _) => false,           // overcrowding
            (false, 3) => true,           // birth
            (false, _) => false,          // stasis
        }
    }

    /// Apply the rules to evolve the grid one generation forward
    ///
    /// Never mutates `current`; returns a freshly allocated grid of the same
    /// dimensions.
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = Grid::new(current.width, current.height);
        Self::evolve_into(current, &mut next);
        next
    }

    /// Evolve `current` one generation into a preallocated `next` buffer
    ///
    /// `next` must have the same dimensions as `current`. The pass reads only
    /// `current` and each row writes only its own slice of `next`, so rows are
    /// computed in parallel.
    pub fn evolve_into(current: &Grid, next: &mut Grid) {
        debug_assert_eq!(current.width, next.width);
        debug_assert_eq!(current.height, next.height);

        let width = current.width;
        next.cells_mut()
            .par_chunks_mut(width.max(1))
            .enumerate()
            .for_each(|(row, next_row)| {
                for (col, slot) in next_row.iter_mut().enumerate() {
                    let neighbors = current.count_neighbors(row, col);
                    *slot = Self::next_state(current.get(row, col), neighbors);
                }
            });
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: u64) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_exhaustive() {
        // Every (state, count) pair maps to exactly the table in the rules:
        // alive survives on 2 or 3, dead is born on exactly 3.
        for n in 0u8..=8 {
            assert_eq!(GameOfLifeRules::next_state(true, n), n == 2 || n == 3);
            assert_eq!(GameOfLifeRules::next_state(false, n), n == 3);
        }
    }

    #[test]
    fn test_still_life_block() {
        // 2x2 block should remain stable
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        // Horizontal blinker at row 2, columns 1-3 on a 5x5 grid
        let mut grid = Grid::new(5, 5);
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }

        // One step: vertical line at column 2, rows 1-3
        let mut vertical = Grid::new(5, 5);
        for row in 1..=3 {
            vertical.set(row, 2, true).unwrap();
        }
        let evolved = GameOfLifeRules::evolve(&grid);
        assert_eq!(evolved, vertical);

        // Second step returns to the original (period 2)
        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, grid);
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true).unwrap();

        let evolved = GameOfLifeRules::evolve(&grid);
        assert!(evolved.is_empty());
    }

    #[test]
    fn test_birth_requires_exactly_three_neighbors() {
        // L-tromino: (0,0), (0,1), (1,0) — the dead cell at (1,1) has exactly
        // 3 live neighbors and is born.
        let cells = vec![
            vec![true, true, false],
            vec![true, false, false],
            vec![false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);
        assert!(evolved.get(1, 1));

        // Two live neighbors: no birth at (1,1)
        let mut two = Grid::new(3, 3);
        two.set(0, 0, true).unwrap();
        two.set(0, 2, true).unwrap();
        assert!(!GameOfLifeRules::evolve(&two).get(1, 1));

        // Four live neighbors: no birth at (1,1)
        let mut four = Grid::new(3, 3);
        four.set(0, 0, true).unwrap();
        four.set(0, 2, true).unwrap();
        four.set(2, 0, true).unwrap();
        four.set(2, 2, true).unwrap();
        assert!(!GameOfLifeRules::evolve(&four).get(1, 1));
    }

    #[test]
    fn test_evolve_does_not_mutate_input() {
        let cells = vec![
            vec![false, true, false],
            vec![false, true, false],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let snapshot = grid.clone();

        let first = GameOfLifeRules::evolve(&grid);
        assert_eq!(grid, snapshot);

        // Deterministic: evolving the untouched input again gives the same result
        let second = GameOfLifeRules::evolve(&grid);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evolve_empty_grid() {
        let grid = Grid::new(0, 0);
        let evolved = GameOfLifeRules::evolve(&grid);
        assert_eq!(evolved.width, 0);
        assert_eq!(evolved.height, 0);
    }

    #[test]
    fn test_evolve_generations_matches_repeated_evolve() {
        let mut grid = Grid::new(5, 5);
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }

        let stepped = GameOfLifeRules::evolve(&GameOfLifeRules::evolve(&grid));
        let generations = GameOfLifeRules::evolve_generations(grid, 2);
        assert_eq!(stepped, generations);
    }
}
