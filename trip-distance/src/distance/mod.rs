//! Great-circle distance over coordinates and trip stop sequences.
//!
//! Two entry points cover the common cases:
//!
//! - [`compute_segment_distance`]: point-to-point distance
//! - [`compute_trip_distance`]: distance travelled between two stops of a
//!   trip, summed hop by hop over the stops in between
//!
//! Both use the default [`DistanceConfig`]. [`DistanceCalculator`] carries
//! an explicit configuration for callers that need a different radius.
//! Everything here is pure and synchronous.

mod accumulate;
mod config;
mod haversine;
mod summary;

pub use accumulate::{path_distance_with, select_segment, trip_distance_with, validate_sequence};
pub use config::{
    ConfigError, DistanceConfig, EARTH_RADIUS_ENV, MAX_EARTH_RADIUS_M, WGS84_EQUATORIAL_RADIUS_M,
};
pub use haversine::{LineSegment, haversine_m, segment_distance};
pub use summary::SegmentSummary;

use crate::domain::{Coordinate, DistanceError, Meters, Stop, StopId, Trip};

/// Distance calculations bound to one configuration.
///
/// # Examples
///
/// ```
/// use trip_distance::distance::{DistanceCalculator, DistanceConfig};
/// use trip_distance::domain::{Coordinate, Meters};
///
/// let calculator = DistanceCalculator::new(DistanceConfig::default());
/// let hannover = Coordinate::new(52.376589, 9.741083).unwrap();
/// let karlsruhe = Coordinate::new(48.993962, 8.401107).unwrap();
///
/// assert_eq!(calculator.segment(hannover, karlsruhe), Meters::new(388213));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceCalculator {
    config: DistanceConfig,
}

impl DistanceCalculator {
    pub fn new(config: DistanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    /// Distance between two coordinates.
    pub fn segment(&self, a: Coordinate, b: Coordinate) -> Meters {
        segment_distance(a, b, &self.config)
    }

    /// Length of a path through the given coordinates, in order.
    pub fn path(&self, coordinates: &[Coordinate]) -> Meters {
        path_distance_with(coordinates.iter().copied(), &self.config)
    }

    /// Distance travelled between two stops of an ordered stop sequence.
    pub fn trip(
        &self,
        stops: &[Stop],
        origin: StopId,
        destination: StopId,
    ) -> Result<Meters, DistanceError> {
        trip_distance_with(stops, origin, destination, &self.config)
    }

    /// Distance plus stop count and planned timing between two stops.
    pub fn summarize(
        &self,
        trip: &Trip,
        origin: StopId,
        destination: StopId,
    ) -> Result<SegmentSummary, DistanceError> {
        let selection = select_segment(&trip.stops, origin, destination)?;
        let distance = path_distance_with(selection.iter().map(Stop::coordinate), &self.config);
        Ok(SegmentSummary::new(selection, distance))
    }
}

/// Point-to-point great-circle distance in whole meters.
pub fn compute_segment_distance(a: Coordinate, b: Coordinate) -> Meters {
    DistanceCalculator::default().segment(a, b)
}

/// Distance travelled between two stops of an ordered stop sequence.
///
/// # Errors
///
/// - `InsufficientStops` for fewer than 2 stops
/// - `UnorderedSequence` if positions do not strictly increase
/// - `MarkerNotFound` if either stop id is absent
pub fn compute_trip_distance(
    stops: &[Stop],
    origin: StopId,
    destination: StopId,
) -> Result<Meters, DistanceError> {
    DistanceCalculator::default().trip(stops, origin, destination)
}

/// Length of a path through the given coordinates, in order.
pub fn path_distance(coordinates: &[Coordinate]) -> Meters {
    DistanceCalculator::default().path(coordinates)
}
