//! Trip types.
//!
//! A `Trip` is an immutable snapshot of a vehicle's run with its full
//! ordered list of stops, as delivered by the trip provider.

use std::fmt;

use super::Stop;

/// Why a provider trip id was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTripId {
    /// Empty or whitespace only
    #[error("trip id is blank")]
    Blank,

    /// Leading or trailing whitespace
    #[error("trip id {0:?} has surrounding whitespace")]
    Padded(String),
}

/// Trip identifier as issued by the timetable provider.
///
/// Providers hand out composite keys such as `"1|2|3|4"`; the pieces are
/// opaque to us and the whole string is compared verbatim. Blank ids and
/// ids with surrounding whitespace are rejected.
///
/// # Examples
///
/// ```
/// use trip_distance::domain::{InvalidTripId, TripId};
///
/// let id = TripId::new("1|2|3|4".to_string()).unwrap();
/// assert_eq!(id.parts().collect::<Vec<_>>(), ["1", "2", "3", "4"]);
///
/// assert_eq!(TripId::new("  ".to_string()), Err(InvalidTripId::Blank));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripId(String);

impl TripId {
    pub fn new(raw: String) -> Result<Self, InvalidTripId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidTripId::Blank);
        }
        if trimmed.len() != raw.len() {
            return Err(InvalidTripId::Padded(raw));
        }
        Ok(TripId(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `|`-separated pieces of a composite provider key.
    ///
    /// An id without separators yields itself as the only piece.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split('|')
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trip with its ordered stops.
///
/// Stop order is kept exactly as received. Ordering is not checked here;
/// the distance functions check it on every call.
#[derive(Debug, Clone)]
pub struct Trip {
    /// Provider trip identifier
    pub id: TripId,
    /// Line name for display (e.g., "RE 2")
    pub line_name: String,
    /// Vehicle/journey number
    pub number: String,
    /// All stops in sequence order
    pub stops: Vec<Stop>,
}

impl Trip {
    /// Returns the first stop (origin of the trip).
    pub fn first_stop(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// Returns the last stop (terminus of the trip).
    pub fn last_stop(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Origin station name for display, or "Unknown" if empty.
    pub fn origin_name(&self) -> &str {
        self.first_stop()
            .map(|s| s.station.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Terminus station name for display, or "Unknown" if empty.
    pub fn destination_name(&self) -> &str {
        self.last_stop()
            .map(|s| s.station.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the trip has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
