//! Error types for the simulation kernel.

use std::fmt;

/// Coordinate axis of a [`Point`](crate::Point).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors raised by the simulation kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineartError {
    /// A point coordinate was outside `[0, max]` on its axis.
    InvalidCoordinate { axis: Axis, value: i32, max: i32 },
    /// The screen size was initialized a second time.
    ScreenSizeAlreadyInitialized,
}

impl fmt::Display for LineartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineartError::InvalidCoordinate { axis, value, max } => write!(
                f,
                "invalid {} value : {}. It should be between 0 and {}",
                axis, value, max
            ),
            LineartError::ScreenSizeAlreadyInitialized => {
                write!(f, "screen size already initialized")
            }
        }
    }
}

impl std::error::Error for LineartError {}

/// Result alias for kernel operations.
pub type Result<T> = std::result::Result<T, LineartError>;
