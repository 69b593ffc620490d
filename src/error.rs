//! Error types for the puzzle engine.

/// Errors that can occur while setting up or operating a puzzle session.
///
/// An inadmissible tile selection is deliberately *not* represented here:
/// clicking a tile that cannot slide is an expected interaction and the
/// engine treats it as a no-op, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// The requested grid size is outside the supported set.
    #[display("unsupported grid size {}x{} (supported sizes are 3x3 through 8x8)", _0, _0)]
    InvalidConfiguration(usize),

    /// A grid invariant was violated.
    ///
    /// This indicates an internal logic fault, not a recoverable user
    /// error. The session that produced it should be discarded.
    #[display("corrupt grid state: {}", _0)]
    CorruptState(&'static str),
}

impl std::error::Error for PuzzleError {}
