//! Output events consumed by presentation collaborators.
//!
//! The engine emits events; audio, UI, and leaderboard hooks live outside
//! this crate and only see these types.

use crate::session::{GameMode, GridSize};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Side-effect events produced by the move engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleEvent {
    /// A tile slid into the empty cell.
    TileMoved {
        /// Move count after the accepted move.
        move_count: u32,
    },
    /// The final tile slid into place and the session became terminal.
    ///
    /// Carries exactly the tuple the leaderboard collaborator records.
    /// The elapsed time is measured by the caller; the engine owns no clock.
    PuzzleCompleted {
        /// Play mode of the finished session.
        mode: GameMode,
        /// Board size of the finished session.
        grid_size: GridSize,
        /// Total accepted moves.
        move_count: u32,
        /// Caller-measured wall-clock duration of the session.
        elapsed: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_moved_wire_shape() {
        let event = PuzzleEvent::TileMoved { move_count: 3 };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json, serde_json::json!({ "tile_moved": { "move_count": 3 } }));
    }

    #[test]
    fn test_completion_event_round_trips() {
        let event = PuzzleEvent::PuzzleCompleted {
            mode: GameMode::Classic,
            grid_size: GridSize::Four,
            move_count: 212,
            elapsed: Duration::from_secs(95),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PuzzleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
