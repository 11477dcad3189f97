//! Error types for cloth construction and lookup.

use core::fmt;

/// Errors raised when building or addressing a cloth.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid dimensions must be at least 2x2 and small enough to index.
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Rest length must be positive and finite.
    InvalidRestLength,
    /// Timestep must be positive and finite.
    InvalidTimestep,
    /// At least one relaxation pass is required.
    InvalidIterations,
    /// Origin and gravity must have finite components.
    NonFiniteVector { field: &'static str },
    /// Grid coordinate lies outside the cloth.
    ParticleOutOfBounds { col: usize, row: usize, cols: usize, rows: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { cols, rows } => {
                write!(f, "grid must be at least 2x2 (got {}x{})", cols, rows)
            }
            ClothError::InvalidRestLength => write!(f, "rest length must be positive and finite"),
            ClothError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            ClothError::InvalidIterations => write!(f, "at least one relaxation pass is required"),
            ClothError::NonFiniteVector { field } => write!(f, "{} must be finite", field),
            ClothError::ParticleOutOfBounds { col, row, cols, rows } => write!(
                f,
                "particle ({}, {}) out of bounds (grid: {}x{})",
                col, row, cols, rows
            ),
        }
    }
}

/// Convenience alias for `Result<T, ClothError>`.
pub type ClothResult<T> = Result<T, ClothError>;
