//! Shuffling by randomized legal walk.
//!
//! The shuffler starts from the solved grid and applies a run of uniformly
//! random legal moves, tracking the empty cell incrementally. Every
//! intermediate arrangement is reachable from the solved state, so the
//! result is solvable by construction; the parity check at the end is a
//! self-check on move application, not a gate.

use crate::error::PuzzleError;
use crate::grid::{Grid, Position};
use crate::solvability;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{instrument, warn};

/// Number of random legal moves a shuffle applies by default.
pub const DEFAULT_SHUFFLE_MOVES: usize = 100;

/// Produces a shuffled, guaranteed-solvable grid of the given size.
///
/// Applies `moves` uniformly random legal moves starting from the solved
/// grid. With `moves == 0` the solved grid itself is returned. If the
/// parity self-check ever fails (which would indicate a bug in move
/// application), the walk is rerun rather than trusting the board.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidConfiguration`] for sizes below 2 and
/// propagates [`PuzzleError::CorruptState`] from the defensive checks.
#[instrument(skip(rng))]
pub fn shuffled_grid<R: Rng>(size: usize, moves: usize, rng: &mut R) -> Result<Grid, PuzzleError> {
    loop {
        let mut grid = Grid::solved(size)?;
        // The empty cell starts in the bottom-right corner.
        let mut empty = Position::new(size - 1, size - 1);

        for _ in 0..moves {
            let neighbors = empty.neighbors(size);
            let Some(&next) = neighbors.choose(rng) else {
                return Err(PuzzleError::CorruptState("empty cell has no neighbors"));
            };
            grid.swap(empty, next);
            empty = next;
        }

        if solvability::is_solvable(&grid)? {
            return Ok(grid);
        }
        warn!(size, moves, "shuffle produced an unsolvable arrangement, rerunning");
    }
}

/// Shuffles with the thread-local RNG and the default move count.
///
/// # Errors
///
/// Same conditions as [`shuffled_grid`].
pub fn shuffled(size: usize) -> Result<Grid, PuzzleError> {
    shuffled_grid(size, DEFAULT_SHUFFLE_MOVES, &mut rand::thread_rng())
}
