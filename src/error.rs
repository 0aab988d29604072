//! Error types for grid construction and external input.

use core::fmt;

/// Errors rejected at the boundary of the simulation.
///
/// Degenerate geometry inside a step is not an error; coincident points
/// simply contribute no spring force.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Grid must have at least one row and one column.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Drawing area must be finite and positive.
    InvalidDrawArea,
    /// Padding must be finite, non-negative and leave a non-empty area.
    InvalidPadding,
    /// Time step must be finite and positive.
    InvalidTimeStep,
    /// Mass must be finite and positive; spring constants finite and non-negative.
    InvalidMaterial,
    /// Grid coordinate is outside the grid.
    PointOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    /// A supplied position contains NaN or infinity.
    NonFinitePosition,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", rows, cols)
            }
            SimulationError::InvalidDrawArea => write!(f, "drawing area must be finite and positive"),
            SimulationError::InvalidPadding => {
                write!(f, "padding must be non-negative and at most half of each dimension")
            }
            SimulationError::InvalidTimeStep => write!(f, "time step must be finite and positive"),
            SimulationError::InvalidMaterial => {
                write!(f, "mass must be positive and spring constants non-negative, all finite")
            }
            SimulationError::PointOutOfBounds { row, col, rows, cols } => {
                write!(f, "point ({}, {}) out of bounds (grid: {}x{})", row, col, rows, cols)
            }
            SimulationError::NonFinitePosition => write!(f, "position must be finite"),
        }
    }
}

impl core::error::Error for SimulationError {}
