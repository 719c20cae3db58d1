//! Error types for location resolution.

use std::fmt;

/// Reasons a requested location cannot be turned into an offset.
///
/// None of these are fatal: the caller refuses the transition and leaves the
/// editor as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    /// Input is not a plain non-negative integer.
    InvalidInput { input: String },
    /// Input is zero, or beyond the last location in the document.
    OutOfRange { requested: String, max: f64 },
    /// Refinement could not bring the estimate within tolerance.
    NoConvergence { requested: u64, steps: usize },
    /// No document is open.
    NoActiveEditor,
    /// A preview arrived while no jump session was open.
    NoSession,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::InvalidInput { input } => {
                write!(f, "Invalid location '{}': expected a whole number", input)
            }
            LocationError::OutOfRange { requested, max } => {
                write!(
                    f,
                    "Location {} is out of range (1 to {:.1})",
                    requested, max
                )
            }
            LocationError::NoConvergence { requested, steps } => write!(
                f,
                "Could not settle on an offset for location {} after {} steps",
                requested, steps
            ),
            LocationError::NoActiveEditor => write!(f, "No active editor"),
            LocationError::NoSession => write!(f, "No jump in progress"),
        }
    }
}

impl std::error::Error for LocationError {}
