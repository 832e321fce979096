use std::path::PathBuf;

use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the clearpath planner.
#[derive(Debug, Error)]
pub enum ClearpathError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl ClearpathError {
    /// Returns `true` for malformed or insufficient input of any kind:
    /// degenerate polygons, out-of-range parameters, empty obstacle sets,
    /// unknown vertices and malformed file lines.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Geometry(_) => true,
            Self::Operation(e) => matches!(e, OperationError::InvalidInput(_)),
            Self::Input(e) => matches!(e, InputError::Malformed { .. } | InputError::Config(_)),
        }
    }

    /// Returns `true` if the destination could not be reached from the source.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Operation(OperationError::Unreachable { .. }))
    }

    /// Returns `true` if an input file could not be opened or read.
    #[must_use]
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::Input(InputError::FileAccess { .. }))
    }
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the planning operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "destination ({}, {}) is unreachable from ({}, {})",
        .to.x, .to.y, .from.x, .from.y
    )]
    Unreachable { from: Point2, to: Point2 },
}

/// Errors from the file-reading boundary layer.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenience type alias for results using [`ClearpathError`].
pub type Result<T> = std::result::Result<T, ClearpathError>;
