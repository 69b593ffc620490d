//! Game session lifecycle: shuffling, playing, completed.
//!
//! Each observable phase is its own type with consuming transitions, in
//! the style of a typestate machine: a playing session always holds a
//! freshly shuffled grid, and a completed session has no move method, so
//! the completion transition can only ever happen once. Shuffling is
//! instantaneous internal setup and has no type of its own.

use crate::error::PuzzleError;
use crate::events::PuzzleEvent;
use crate::grid::{Grid, Position};
use crate::invariants;
use crate::shuffle::{self, DEFAULT_SHUFFLE_MOVES};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Supported board sizes, 3x3 through 8x8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(into = "usize", try_from = "usize")]
pub enum GridSize {
    /// 3x3 board (8 tiles).
    Three,
    /// 4x4 board (15 tiles).
    Four,
    /// 5x5 board (24 tiles).
    Five,
    /// 6x6 board (35 tiles).
    Six,
    /// 7x7 board (48 tiles).
    Seven,
    /// 8x8 board (63 tiles).
    Eight,
}

impl GridSize {
    /// Validates a raw side length against the supported set.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] for anything outside
    /// 3..=8.
    pub fn new(size: usize) -> Result<Self, PuzzleError> {
        match size {
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            5 => Ok(GridSize::Five),
            6 => Ok(GridSize::Six),
            7 => Ok(GridSize::Seven),
            8 => Ok(GridSize::Eight),
            other => Err(PuzzleError::InvalidConfiguration(other)),
        }
    }

    /// Side length in cells.
    pub fn side(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
            GridSize::Six => 6,
            GridSize::Seven => 7,
            GridSize::Eight => 8,
        }
    }

    /// Number of numbered tiles on a board of this size.
    pub fn tile_count(self) -> usize {
        self.side() * self.side() - 1
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> usize {
        size.side()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = PuzzleError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        GridSize::new(size)
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.side(), self.side())
    }
}

/// Play mode selected at session creation.
///
/// The engine behaves identically in both modes; timing is the caller's
/// concern. The mode is carried through to completion events so the
/// leaderboard can key records by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Untimed play.
    Classic,
    /// Race against the clock.
    TimeAttack,
}

// ─────────────────────────────────────────────────────────────
//  Playing phase
// ─────────────────────────────────────────────────────────────

/// A session in the playing phase; accepts tile selections.
///
/// Exclusively owns its grid. The empty cell's position is tracked as a
/// field and updated on every accepted move, so no per-move grid scan is
/// needed.
#[derive(Debug, Clone)]
pub struct SessionPlaying {
    mode: GameMode,
    size: GridSize,
    grid: Grid,
    empty: Position,
    move_count: u32,
}

impl SessionPlaying {
    /// Creates a session over a freshly shuffled, guaranteed-solvable grid.
    ///
    /// # Errors
    ///
    /// Propagates [`PuzzleError::CorruptState`] from the shuffler's
    /// defensive checks.
    #[instrument]
    pub fn new(mode: GameMode, size: GridSize) -> Result<Self, PuzzleError> {
        Self::with_rng(mode, size, &mut rand::thread_rng())
    }

    /// Like [`SessionPlaying::new`], with a caller-supplied RNG for
    /// reproducible shuffles.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionPlaying::new`].
    #[instrument(skip(rng))]
    pub fn with_rng<R: Rng>(
        mode: GameMode,
        size: GridSize,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let grid = shuffle::shuffled_grid(size.side(), DEFAULT_SHUFFLE_MOVES, rng)?;
        let empty = grid.locate_empty()?;
        info!(%size, ?mode, "created session");
        Ok(Self {
            mode,
            size,
            grid,
            empty,
            move_count: 0,
        })
    }

    /// Resumes a session from a previously captured grid.
    ///
    /// Intended for frontends restoring an interrupted game.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidConfiguration`] if the grid's side
    /// length does not match `size`, and [`PuzzleError::CorruptState`] if
    /// the grid violates its invariants.
    #[instrument(skip(grid))]
    pub fn resume(
        mode: GameMode,
        size: GridSize,
        grid: Grid,
        move_count: u32,
    ) -> Result<Self, PuzzleError> {
        if grid.size() != size.side() {
            return Err(PuzzleError::InvalidConfiguration(grid.size()));
        }
        invariants::check(&grid)?;
        let empty = grid.locate_empty()?;
        Ok(Self {
            mode,
            size,
            grid,
            empty,
            move_count,
        })
    }

    /// Applies a player's tile selection.
    ///
    /// A selection that is out of bounds or not adjacent to the empty cell
    /// is ignored: the session comes back unchanged and no event fires.
    /// An adjacent selection slides the tile into the empty cell,
    /// increments the move counter, and emits [`PuzzleEvent::TileMoved`];
    /// if that move solves the puzzle the session transitions to
    /// [`SessionCompleted`].
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::CorruptState`] only if a debug-build
    /// invariant check fails after the move.
    #[instrument(skip(self), fields(size = %self.size, move_count = self.move_count))]
    pub fn select(self, pos: Position) -> Result<MoveOutcome, PuzzleError> {
        if !self.grid.contains(pos) || !pos.is_adjacent(self.empty) {
            debug!(%pos, empty = %self.empty, "ignored inadmissible selection");
            return Ok(MoveOutcome::Ignored(self));
        }

        let mut session = self;
        session.grid.swap(pos, session.empty);
        session.empty = pos;
        session.move_count += 1;

        #[cfg(debug_assertions)]
        invariants::check(&session.grid)?;

        let event = PuzzleEvent::TileMoved {
            move_count: session.move_count,
        };

        if session.grid.is_solved() {
            info!(move_count = session.move_count, size = %session.size, "puzzle completed");
            return Ok(MoveOutcome::Completed(
                SessionCompleted {
                    mode: session.mode,
                    size: session.size,
                    grid: session.grid,
                    move_count: session.move_count,
                },
                event,
            ));
        }

        Ok(MoveOutcome::Moved(session, event))
    }

    /// Play mode of this session.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Board size of this session.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The current tile arrangement.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Position of the empty cell.
    pub fn empty(&self) -> Position {
        self.empty
    }

    /// Accepted moves so far. Starts at 0 and only increases.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}

// ─────────────────────────────────────────────────────────────
//  Completed phase
// ─────────────────────────────────────────────────────────────

/// A finished session: the solved grid plus its final counters.
///
/// Terminal for this session instance; there is no way to feed it further
/// moves. Only [`SessionCompleted::replay`] returns to play, with a fresh
/// grid.
#[derive(Debug, Clone)]
pub struct SessionCompleted {
    mode: GameMode,
    size: GridSize,
    grid: Grid,
    move_count: u32,
}

impl SessionCompleted {
    /// Play mode of the finished session.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Board size of the finished session.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The solved arrangement, for final display.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Total accepted moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Builds the completion event from the caller-measured elapsed time.
    ///
    /// The engine owns no clock; whoever drives the session measures how
    /// long it ran and passes that in for the leaderboard record.
    pub fn completion_event(&self, elapsed: Duration) -> PuzzleEvent {
        PuzzleEvent::PuzzleCompleted {
            mode: self.mode,
            grid_size: self.size,
            move_count: self.move_count,
            elapsed,
        }
    }

    /// Starts a fresh session of the same mode and size.
    ///
    /// The finished grid is discarded; the new session gets its own
    /// freshly shuffled grid.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionPlaying::new`].
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn replay(self) -> Result<SessionPlaying, PuzzleError> {
        SessionPlaying::new(self.mode, self.size)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move outcome
// ─────────────────────────────────────────────────────────────

/// Result of a tile selection: an explicit state transition.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The selection was not adjacent to the empty cell; nothing changed.
    Ignored(SessionPlaying),
    /// The tile slid into the empty cell; play continues.
    Moved(SessionPlaying, PuzzleEvent),
    /// The tile slid into the empty cell and solved the puzzle.
    Completed(SessionCompleted, PuzzleEvent),
}

impl MoveOutcome {
    /// True iff the selection was accepted and mutated the session.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// The event emitted by the accepted move, if any.
    pub fn event(&self) -> Option<PuzzleEvent> {
        match self {
            MoveOutcome::Ignored(_) => None,
            MoveOutcome::Moved(_, event) | MoveOutcome::Completed(_, event) => Some(*event),
        }
    }
}
