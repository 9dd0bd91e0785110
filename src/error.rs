//! Game-specific error types.
//!
//! The fallible seams are small: target construction against the surface
//! bounds, and resolving an already-resolved target.  Both return these types
//! rather than panicking, so callers can log and continue.

use std::fmt;

/// Top-level error enum for the aim trainer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Target construction was attempted against a degenerate surface.
    /// Spawning is effectively disabled while the bounds stay non-positive.
    InvalidBounds {
        /// Surface width passed to the constructor.
        width: f32,
        /// Surface height passed to the constructor.
        height: f32,
    },

    /// A target was asked to resolve (hit or miss) a second time.
    /// Resolution is exactly-once; this is a caller bug, not a game state.
    AlreadyResolved {
        /// Name of the terminal state the target was already in.
        state: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidBounds { width, height } => write!(
                f,
                "surface bounds {}×{} are invalid: both dimensions must be positive",
                width, height
            ),
            GameError::AlreadyResolved { state } => {
                write!(f, "target already resolved as '{}'", state)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless both surface dimensions are strictly positive.
pub fn validate_bounds(width: f32, height: f32) -> GameResult<()> {
    if width <= 0.0 || height <= 0.0 {
        Err(GameError::InvalidBounds { width, height })
    } else {
        Ok(())
    }
}
