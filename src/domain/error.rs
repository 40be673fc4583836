//! Errors raised by the automaton core.

use thiserror::Error;

/// Everything that can go wrong while building boards, looking up patterns
/// or advancing a generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Requested pattern is not in the catalog
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Cell index outside the board
    #[error("cell ({row}, {col}) is outside the {height}x{width} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// Board or pattern with a zero dimension
    #[error("invalid dimensions {height}x{width}: both must be positive")]
    InvalidDimensions { height: usize, width: usize },

    /// Pattern coordinate outside the pattern's declared size
    #[error("pattern {pattern} has cell ({row}, {col}) outside its bounds")]
    InvalidPattern {
        pattern: String,
        row: usize,
        col: usize,
    },
}

/// Result type for automaton operations
pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    /// Create an unknown pattern error
    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern(name.into())
    }
}
