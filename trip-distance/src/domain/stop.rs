//! Stop types for trips.
//!
//! A `Stop` is a single stopover of a trip at a station, with its position
//! in the trip's sequence and optional planned times. A `StopId` is the
//! opaque identity used to pick a specific stop out of the sequence.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use super::{Coordinate, Station};

/// Identity of a stop within a trip.
///
/// Used instead of `StationId` to disambiguate trips that call at the
/// same station more than once (loops, turnbacks).
///
/// # Examples
///
/// ```
/// use trip_distance::domain::StopId;
///
/// let id = StopId(17);
/// assert_eq!(id.to_string(), "17");
///
/// // StopId is Copy
/// let id2 = id;
/// assert_eq!(id, id2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub u64);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StopId {
    fn from(value: u64) -> Self {
        StopId(value)
    }
}

/// Position of a stop in its trip's sequence.
///
/// Positions increase strictly along the trip but need not be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequencePosition(pub u32);

impl fmt::Display for SequencePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stopover of a trip at a station.
///
/// # Time Semantics
///
/// - For the first stop of a trip only the departure is meaningful
/// - For the last stop only the arrival is meaningful
/// - Intermediate stops may carry both
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Identity of this stop
    pub id: StopId,
    /// Position in the trip's sequence
    pub position: SequencePosition,
    /// Station the trip stops at
    pub station: Station,
    /// Planned arrival time
    pub planned_arrival: Option<DateTime<FixedOffset>>,
    /// Planned departure time
    pub planned_departure: Option<DateTime<FixedOffset>>,
}

impl Stop {
    /// Creates a stop with no planned times.
    pub fn new(id: StopId, position: SequencePosition, station: Station) -> Self {
        Self {
            id,
            position,
            station,
            planned_arrival: None,
            planned_departure: None,
        }
    }

    /// Location of this stop, taken from its station.
    pub fn coordinate(&self) -> Coordinate {
        self.station.coordinate
    }
}
