//! Grid invariants checked defensively by the engine.
//!
//! Invariants are logical properties every grid the engine touches must
//! satisfy. They are enforced at validated construction points and
//! re-checked after moves in debug builds.

use crate::error::PuzzleError;
use crate::grid::{Cell, Grid};

/// A property that must hold for every well-formed grid.
pub trait Invariant {
    /// Checks whether the invariant holds.
    fn holds(grid: &Grid) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: exactly one empty cell exists.
pub struct SingleEmpty;

impl Invariant for SingleEmpty {
    fn holds(grid: &Grid) -> bool {
        grid.cells().iter().filter(|cell| cell.is_empty()).count() == 1
    }

    fn description() -> &'static str {
        "exactly one empty cell"
    }
}

/// Invariant: every label 1..=n²−1 appears exactly once.
pub struct UniqueLabels;

impl Invariant for UniqueLabels {
    fn holds(grid: &Grid) -> bool {
        let tiles = grid.size() * grid.size() - 1;
        let mut seen = vec![false; tiles + 1];
        for cell in grid.cells() {
            if let Cell::Tile(label) = cell {
                let label = *label as usize;
                if label == 0 || label > tiles || seen[label] {
                    return false;
                }
                seen[label] = true;
            }
        }
        seen[1..].iter().all(|&present| present)
    }

    fn description() -> &'static str {
        "each tile label 1..=n^2-1 appears exactly once"
    }
}

/// Checks all grid invariants, mapping the first violation to
/// [`PuzzleError::CorruptState`].
pub(crate) fn check(grid: &Grid) -> Result<(), PuzzleError> {
    if !SingleEmpty::holds(grid) {
        return Err(PuzzleError::CorruptState(SingleEmpty::description()));
    }
    if !UniqueLabels::holds(grid) {
        return Err(PuzzleError::CorruptState(UniqueLabels::description()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_solved_grid_satisfies_invariants() {
        let grid = Grid::solved(4).unwrap();
        assert!(SingleEmpty::holds(&grid));
        assert!(UniqueLabels::holds(&grid));
        assert!(check(&grid).is_ok());
    }

    #[test]
    fn test_invariants_survive_swaps() {
        let mut grid = Grid::solved(3).unwrap();
        grid.swap(Position::new(2, 2), Position::new(2, 1));
        grid.swap(Position::new(2, 1), Position::new(1, 1));
        assert!(check(&grid).is_ok());
    }
}
