//! Slider puzzle engine - sliding-tile ("N-puzzle") game logic.
//!
//! A player rearranges numbered tiles on an N x N grid by sliding tiles
//! into the single empty cell until they read in ascending order. This
//! crate is the puzzle-state core; rendering, input mapping, audio, and
//! leaderboard persistence are collaborators that drive it from outside.
//!
//! # Architecture
//!
//! - **Grid model**: the tile arrangement, its invariants, and flat
//!   row-major serialization ([`Grid`], [`Position`], [`Cell`])
//! - **Shuffler**: randomized legal-walk shuffling, solvable by
//!   construction ([`shuffled_grid`])
//! - **Move engine**: typestate session phases with validated moves and
//!   completion detection ([`SessionPlaying`], [`SessionCompleted`])
//! - **Events**: side effects for audio, UI, and leaderboard hooks
//!   ([`PuzzleEvent`])
//!
//! # Example
//!
//! ```
//! use slider_core::{GameMode, GridSize, SessionPlaying};
//!
//! # fn main() -> Result<(), slider_core::PuzzleError> {
//! let session = SessionPlaying::new(GameMode::Classic, GridSize::Four)?;
//!
//! // Any neighbor of the empty cell is a legal move.
//! let target = session.empty().neighbors(4)[0];
//! let outcome = session.select(target)?;
//! assert!(outcome.is_accepted());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod events;
mod grid;
mod invariants;
mod session;
mod shuffle;
mod solvability;

// Crate-level exports - errors
pub use error::PuzzleError;

// Crate-level exports - output events
pub use events::PuzzleEvent;

// Crate-level exports - grid model
pub use grid::{Cell, EMPTY_LABEL, Grid, Position};

// Crate-level exports - invariants
pub use invariants::{Invariant, SingleEmpty, UniqueLabels};

// Crate-level exports - session lifecycle
pub use session::{GameMode, GridSize, MoveOutcome, SessionCompleted, SessionPlaying};

// Crate-level exports - shuffler
pub use shuffle::{DEFAULT_SHUFFLE_MOVES, shuffled, shuffled_grid};
