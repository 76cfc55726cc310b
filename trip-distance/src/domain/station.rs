//! Station types.

use std::fmt;

use super::Coordinate;

/// Numeric station identifier (IBNR / UIC station number).
///
/// # Examples
///
/// ```
/// use trip_distance::domain::StationId;
///
/// let lille = StationId(8700030);
/// assert_eq!(lille.to_string(), "8700030");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StationId {
    fn from(value: u64) -> Self {
        StationId(value)
    }
}

/// A station with its location.
///
/// Stops take their coordinate from the station they call at.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station identifier
    pub id: StationId,
    /// Display name (e.g., "Paris Nord")
    pub name: String,
    /// Location of the station
    pub coordinate: Coordinate,
}

impl Station {
    /// Creates a new station.
    pub fn new(id: StationId, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            coordinate,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
