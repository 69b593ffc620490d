//! Grid model for the sliding-tile puzzle.
//!
//! A grid is an N x N matrix of cells holding the tile labels 1..=N²−1
//! plus exactly one empty cell. Cells are stored flat in row-major order.

use crate::error::PuzzleError;
use crate::invariants;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Distinguished label standing in for the empty cell in flattened output.
pub const EMPTY_LABEL: u8 = 0;

/// A single cell on the puzzle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// The one vacant cell that tiles slide into.
    Empty,
    /// A numbered tile. Labels run 1..=n²−1.
    Tile(u8),
}

impl Cell {
    /// Returns the tile label, or [`EMPTY_LABEL`] for the empty cell.
    pub fn label(self) -> u8 {
        match self {
            Cell::Empty => EMPTY_LABEL,
            Cell::Tile(label) => label,
        }
    }

    /// True iff this is the empty cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A (row, column) coordinate on the grid, counted from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0-based from the top.
    pub row: usize,
    /// Column index, 0-based from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff the two positions are orthogonally adjacent: they share a
    /// row or a column and differ by exactly one in the other coordinate.
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row.abs_diff(other.row) == 1 && self.col == other.col)
            || (self.col.abs_diff(other.col) == 1 && self.row == other.row)
    }

    /// The orthogonal neighbors of this position within an n x n grid.
    ///
    /// Returns between two (corner) and four (interior) positions.
    pub fn neighbors(self, size: usize) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if self.row > 0 {
            neighbors.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            neighbors.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            neighbors.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            neighbors.push(Position::new(self.row, self.col + 1));
        }
        neighbors
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An N x N tile arrangement with exactly one empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    /// Cells in row-major order, length size * size.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates the solved arrangement: labels 1..n²−1 in row-major order
    /// followed by the empty cell in the bottom-right corner.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] if `size < 2`.
    #[instrument]
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        if size < 2 {
            return Err(PuzzleError::InvalidConfiguration(size));
        }
        let tiles = size * size - 1;
        let mut cells: Vec<Cell> = (1..=tiles).map(|label| Cell::Tile(label as u8)).collect();
        cells.push(Cell::Empty);
        Ok(Self { size, cells })
    }

    /// Builds a grid from a flat row-major label sequence, with
    /// [`EMPTY_LABEL`] marking the empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] if the size is below 2
    /// or the sequence length is not `size * size`, and
    /// [`PuzzleError::CorruptState`] if the labels violate the grid
    /// invariants (one empty cell, each label 1..=n²−1 exactly once).
    #[instrument(skip(labels))]
    pub fn from_labels(size: usize, labels: &[u8]) -> Result<Self, PuzzleError> {
        if size < 2 || labels.len() != size * size {
            return Err(PuzzleError::InvalidConfiguration(size));
        }
        let cells = labels
            .iter()
            .map(|&label| match label {
                EMPTY_LABEL => Cell::Empty,
                tile => Cell::Tile(tile),
            })
            .collect();
        let grid = Self { size, cells };
        invariants::check(&grid)?;
        Ok(grid)
    }

    /// Side length of the grid in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True iff the position lies within the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Bounds-checked cell access.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Exchanges the contents of two cells in place.
    ///
    /// No adjacency or legality check happens at this layer; that is the
    /// move engine's contract.
    ///
    /// # Panics
    ///
    /// Panics if either position lies outside the grid.
    pub fn swap(&mut self, a: Position, b: Position) {
        assert!(
            self.contains(a) && self.contains(b),
            "swap positions must lie within the grid"
        );
        let i = self.index(a);
        let j = self.index(b);
        self.cells.swap(i, j);
    }

    /// Locates the unique empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CorruptState`] if zero or more than one empty
    /// cell exists. Unreachable through the public API; kept as a defensive
    /// check.
    #[instrument(skip(self))]
    pub fn locate_empty(&self) -> Result<Position, PuzzleError> {
        let mut found = None;
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.is_empty() {
                if found.is_some() {
                    return Err(PuzzleError::CorruptState("more than one empty cell"));
                }
                found = Some(Position::new(index / self.size, index % self.size));
            }
        }
        found.ok_or(PuzzleError::CorruptState("no empty cell"))
    }

    /// Row-major label sequence with the empty cell mapped to
    /// [`EMPTY_LABEL`]. Used for equality and inversion checks.
    pub fn flatten(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.label()).collect()
    }

    /// True iff the tiles read 1..n²−1 in row-major order with the empty
    /// cell last.
    pub fn is_solved(&self) -> bool {
        let tiles = self.size * self.size - 1;
        self.cells.iter().enumerate().all(|(index, cell)| {
            if index == tiles {
                cell.is_empty()
            } else {
                *cell == Cell::Tile((index + 1) as u8)
            }
        })
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.cells[row * self.size + col] {
                    Cell::Empty => write!(f, "  . ")?,
                    Cell::Tile(label) => write!(f, "{:3} ", label)?,
                }
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
    fn test_solved_grid_flattens_to_ascending_labels() {
        for size in 2..=8 {
            let grid = Grid::solved(size).expect("valid size");
            let mut expected: Vec<u8> = (1..(size * size) as u8).collect();
            expected.push(EMPTY_LABEL);
            assert_eq!(grid.flatten(), expected);
            assert!(grid.is_solved());
        }
    }

    #[test]
    fn test_solved_rejects_degenerate_sizes() {
        assert_eq!(Grid::solved(0), Err(PuzzleError::InvalidConfiguration(0)));
        assert_eq!(Grid::solved(1), Err(PuzzleError::InvalidConfiguration(1)));
    }

    #[test]
    fn test_locate_empty_in_solved_grid() {
        let grid = Grid::solved(4).unwrap();
        assert_eq!(grid.locate_empty(), Ok(Position::new(3, 3)));
    }

    #[test]
    fn test_swap_moves_empty_cell() {
        let mut grid = Grid::solved(3).unwrap();
        grid.swap(Position::new(2, 2), Position::new(1, 2));
        assert_eq!(grid.locate_empty(), Ok(Position::new(1, 2)));
        assert_eq!(grid.get(Position::new(2, 2)), Some(Cell::Tile(6)));
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let a = Position::new(1, 2);
        let b = Position::new(1, 1);
        assert!(a.is_adjacent(b));
        assert!(b.is_adjacent(a));

        let diagonal = Position::new(2, 1);
        assert!(!a.is_adjacent(diagonal));
        assert!(!diagonal.is_adjacent(a));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn test_neighbor_counts() {
        // Corner, edge, and interior of a 3x3 grid.
        assert_eq!(Position::new(0, 0).neighbors(3).len(), 2);
        assert_eq!(Position::new(0, 1).neighbors(3).len(), 3);
        assert_eq!(Position::new(1, 1).neighbors(3).len(), 4);
        // A 2x2 grid only ever has corner cells.
        assert_eq!(Position::new(1, 1).neighbors(2).len(), 2);
    }

    #[test]
    fn test_from_labels_round_trips() {
        let grid = Grid::from_labels(3, &[1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();
        assert_eq!(grid.locate_empty(), Ok(Position::new(1, 2)));
        assert_eq!(grid.flatten(), vec![1, 2, 3, 4, 5, 0, 7, 8, 6]);
    }

    #[test]
    fn test_from_labels_rejects_bad_shapes() {
        assert_eq!(
            Grid::from_labels(3, &[1, 2, 3]),
            Err(PuzzleError::InvalidConfiguration(3))
        );
        assert_eq!(
            Grid::from_labels(1, &[0]),
            Err(PuzzleError::InvalidConfiguration(1))
        );
    }

    #[test]
    fn test_from_labels_rejects_invariant_violations() {
        // Duplicate label, no empty cell.
        assert!(matches!(
            Grid::from_labels(2, &[1, 1, 2, 3]),
            Err(PuzzleError::CorruptState(_))
        ));
        // Two empty cells.
        assert!(matches!(
            Grid::from_labels(2, &[1, 0, 0, 2]),
            Err(PuzzleError::CorruptState(_))
        ));
        // Label out of range for a 2x2 grid.
        assert!(matches!(
            Grid::from_labels(2, &[1, 2, 9, 0]),
            Err(PuzzleError::CorruptState(_))
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::solved(3).unwrap();
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, 3)), None);
    }
}
