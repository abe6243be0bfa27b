//! Grid representation and utilities for Game of Life

use std::fmt;

/// A fixed-size rectangular grid of live/dead cells
///
/// Storage is a flat row-major `Vec<bool>`. Positions outside the grid are
/// treated as dead; there is no wraparound, so corner cells see at most 3
/// neighbors and edge cells at most 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid from a 2D boolean array
    ///
    /// All rows must have the same length. An empty outer vector produces an
    /// empty 0x0 grid.
    pub fn from_cells(cells: Vec<Vec<bool>>) -> anyhow::Result<Self> {
        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell value at coordinates; out of bounds reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> anyhow::Result<()> {
        if row >= self.height || col >= self.width {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.height,
                self.width
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors in the Moore neighborhood of a cell
    ///
    /// Neighbor positions outside the grid contribute 0.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 0
                    && r < self.height as isize
                    && c >= 0
                    && c < self.width as isize
                    && self.cells[self.index(r as usize, c as usize)]
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Read-only view of the flat cell storage
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable view of the flat cell storage, for whole-grid passes
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.as_slice().len(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_empty_dimensions_allowed() {
        let grid = Grid::new(0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.living_count(), 0);
        assert!(!grid.get(0, 0));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_grid_from_ragged_cells_fails() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells).is_err());
    }

    #[test]
    fn test_set_out_of_bounds_fails() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set(2, 0, true).is_err());
        assert!(grid.set(0, 2, true).is_err());
    }

    #[test]
    fn test_neighbor_counting_interior() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        // Interior cell sees all 8 neighbors
        assert_eq!(grid.count_neighbors(1, 1), 8);
    }

    #[test]
    fn test_neighbor_counting_no_wraparound() {
        // Live cells along the right edge must not be visible from the left edge
        let cells = vec![
            vec![false, false, true],
            vec![false, false, true],
            vec![false, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 0), 0);
        assert_eq!(grid.count_neighbors(1, 2), 2);
    }

    #[test]
    fn test_neighbor_counting_corner_and_edge_maxima() {
        let cells = vec![
            vec![true, true, true],
            vec![true, true, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        // Corner sees 3 in-bounds neighbors, edge sees 5, interior sees 8
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(0, 1), 5);
        assert_eq!(grid.count_neighbors(1, 1), 8);
    }
}
