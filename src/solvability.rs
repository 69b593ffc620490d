//! Solvability classification for tile arrangements.
//!
//! Implements the classic 15-puzzle parity theorem generalized to N x N
//! grids. The shuffler only ever produces arrangements reachable from the
//! solved state, so inside this crate the predicate serves as a self-check
//! on move application rather than a gate; it is deliberately not part of
//! the public API.

use crate::error::PuzzleError;
use crate::grid::{EMPTY_LABEL, Grid};
use tracing::instrument;

/// Counts pairs of tiles that appear out of ascending order in the
/// row-major flattened sequence, with the empty cell excluded.
#[instrument(skip(grid), fields(size = grid.size()))]
pub(crate) fn count_inversions(grid: &Grid) -> usize {
    let labels: Vec<u8> = grid
        .flatten()
        .into_iter()
        .filter(|&label| label != EMPTY_LABEL)
        .collect();

    labels
        .iter()
        .enumerate()
        .map(|(i, &label)| labels[i + 1..].iter().filter(|&&later| later < label).count())
        .sum()
}

/// Applies the parity rule to classify an arrangement as solvable.
///
/// - Odd N: solvable iff the inversion count is even.
/// - Even N: with the empty cell's row counted 1-indexed from the bottom,
///   an even row requires an odd inversion count and an odd row requires
///   an even one.
///
/// # Errors
///
/// Propagates [`PuzzleError::CorruptState`] from locating the empty cell.
#[instrument(skip(grid), fields(size = grid.size()))]
pub(crate) fn is_solvable(grid: &Grid) -> Result<bool, PuzzleError> {
    let empty = grid.locate_empty()?;
    let inversions = count_inversions(grid);

    if grid.size() % 2 == 1 {
        Ok(inversions % 2 == 0)
    } else {
        let empty_row_from_bottom = grid.size() - empty.row;
        if empty_row_from_bottom % 2 == 0 {
            Ok(inversions % 2 == 1)
        } else {
            Ok(inversions % 2 == 0)
        }
    }
}
