//! Row-major iteration-count grids.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one fractal evaluation: a `height x width` grid of iteration
/// counts, each cell in `[0, max_iterations]`.
///
/// The grid is immutable once produced and owned by the caller. It carries
/// the iteration bound it was computed with so consumers can normalize the
/// counts (for a heat map, say) without re-supplying the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationGrid {
    cells: Array2<u32>,
    max_iterations: u32,
}

impl IterationGrid {
    /// Wrap a row-major cell buffer; the evaluator sizes it.
    pub(crate) fn from_raw(
        height: usize,
        width: usize,
        max_iterations: u32,
        cells: Vec<u32>,
    ) -> Self {
        let cells = Array2::from_shape_vec((height, width), cells)
            .expect("cell buffer length must equal width * height");
        Self {
            cells,
            max_iterations,
        }
    }

    /// Grid dimensions as (height, width).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cells.nrows(), self.cells.ncols())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Iteration bound the grid was computed with.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Count at pixel column x, row y, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.cells.get((y, x)).copied()
    }

    /// Borrow the underlying `height x width` array.
    pub fn as_array(&self) -> &Array2<u32> {
        &self.cells
    }

    /// Consume the grid, returning the underlying array.
    pub fn into_array(self) -> Array2<u32> {
        self.cells
    }
}

impl fmt::Display for IterationGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IterationGrid {}x{} (max {})",
            self.width(),
            self.height(),
            self.max_iterations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        // 2 rows of 3: cell value encodes y * 10 + x.
        let grid = IterationGrid::from_raw(2, 3, 20, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(2, 0), Some(2));
        assert_eq!(grid.get(0, 1), Some(10));
        assert_eq!(grid.get(2, 1), Some(12));
    }

    #[test]
    fn test_get_outside_grid_is_none() {
        let grid = IterationGrid::from_raw(2, 2, 1, vec![0, 1, 1, 0]);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_display() {
        let grid = IterationGrid::from_raw(2, 3, 20, vec![0; 6]);
        assert_eq!(grid.to_string(), "IterationGrid 3x2 (max 20)");
    }

    #[test]
    fn test_into_array_preserves_shape() {
        let grid = IterationGrid::from_raw(4, 5, 9, vec![7; 20]);
        let array = grid.into_array();
        assert_eq!(array.dim(), (4, 5));
        assert!(array.iter().all(|&cell| cell == 7));
    }
}
