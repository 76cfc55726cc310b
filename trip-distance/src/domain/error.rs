//! Domain error types.
//!
//! These errors represent validation failures of distance inputs.
//! They are distinct from snapshot/IO errors.

use std::fmt;

use super::{InvalidCoordinate, SequencePosition, StopId};

/// Which of the two markers a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Origin,
    Destination,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Origin => f.write_str("origin"),
            Marker::Destination => f.write_str("destination"),
        }
    }
}

/// Errors from trip distance computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// Coordinate out of range or not finite
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    /// Marker identity does not appear in the stop sequence
    #[error("{marker} stop {stop} not found in stop sequence")]
    MarkerNotFound { marker: Marker, stop: StopId },

    /// Stop positions do not strictly increase
    #[error("stop sequence not ordered at index {index}: position {current} follows {previous}")]
    UnorderedSequence {
        index: usize,
        previous: SequencePosition,
        current: SequencePosition,
    },

    /// Not enough stops to form a segment
    #[error("at least 2 stops are required, found {found}")]
    InsufficientStops { found: usize },
}
