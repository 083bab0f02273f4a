//! Error types for point and triangle operations.

use std::fmt;

use thiserror::Error;

use crate::coords::Axis;

/// Which side of a binary point operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The receiver (`self`).
    Left,
    /// The argument (`other`).
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Left => f.write_str("left"),
            Operand::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur while building or measuring geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Invalid operand: {operand} point has no label")]
    MissingLabel { operand: Operand },

    #[error("Malformed point: {0:?}")]
    MalformedPoint(String),

    #[error("Missing coordinate: {axis}")]
    MissingCoordinate { axis: Axis },

    #[error("Invalid {axis} coordinate: {value:?}")]
    InvalidCoordinate { axis: Axis, value: String },

    #[error("Too many coordinates: expected 3, got {count}")]
    TooManyCoordinates { count: usize },

    #[error("A triangle needs exactly 3 vertices, got {count}")]
    VertexCount { count: usize },

    #[error("Negative radicand in Heron's formula: {radicand}")]
    NegativeRadicand { radicand: f64 },

    #[error("Unknown area policy: {0:?} (expected clamp, nan or strict)")]
    UnknownAreaPolicy(String),
}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
