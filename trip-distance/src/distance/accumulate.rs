//! Distance accumulation over a trip's stop sequence.
//!
//! The selection between two markers is the inclusive index range
//! `min(origin, destination)..=max(origin, destination)`, kept in
//! sequence order, so swapping the markers never changes the result.

use tracing::{debug, trace};

use crate::domain::{Coordinate, DistanceError, Marker, Meters, Stop, StopId};

use super::config::DistanceConfig;
use super::haversine::segment_distance;

/// Check that a stop sequence can be measured.
///
/// # Errors
///
/// - `InsufficientStops` if there are fewer than 2 stops
/// - `UnorderedSequence` at the first position that does not strictly
///   increase over its predecessor
pub fn validate_sequence(stops: &[Stop]) -> Result<(), DistanceError> {
    if stops.len() < 2 {
        return Err(DistanceError::InsufficientStops { found: stops.len() });
    }

    for (i, pair) in stops.windows(2).enumerate() {
        let (previous, current) = (pair[0].position, pair[1].position);
        if current <= previous {
            return Err(DistanceError::UnorderedSequence {
                index: i + 1,
                previous,
                current,
            });
        }
    }

    Ok(())
}

fn index_of(stops: &[Stop], id: StopId, marker: Marker) -> Result<usize, DistanceError> {
    stops
        .iter()
        .position(|stop| stop.id == id)
        .ok_or(DistanceError::MarkerNotFound { marker, stop: id })
}

/// Select the contiguous run of stops between two markers, inclusive.
///
/// The sequence is validated first (see [`validate_sequence`]).
pub fn select_segment(
    stops: &[Stop],
    origin: StopId,
    destination: StopId,
) -> Result<&[Stop], DistanceError> {
    validate_sequence(stops)?;

    let origin_idx = index_of(stops, origin, Marker::Origin)?;
    let destination_idx = index_of(stops, destination, Marker::Destination)?;

    let (start, end) = if origin_idx <= destination_idx {
        (origin_idx, destination_idx)
    } else {
        debug!(
            %origin,
            %destination,
            "destination precedes origin, selecting range in sequence order"
        );
        (destination_idx, origin_idx)
    };

    Ok(&stops[start..=end])
}

/// Sum of segment distances over consecutive coordinates.
///
/// Fewer than two coordinates have zero length.
pub fn path_distance_with<I>(coordinates: I, config: &DistanceConfig) -> Meters
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut coordinates = coordinates.into_iter();
    let Some(mut previous) = coordinates.next() else {
        return Meters::ZERO;
    };

    let mut total = Meters::ZERO;
    for current in coordinates {
        let hop = segment_distance(previous, current, config);
        trace!(from = %previous, to = %current, meters = hop.value(), "segment");
        total += hop;
        previous = current;
    }
    total
}

/// Distance travelled between two stops of a trip.
///
/// # Errors
///
/// Same as [`select_segment`].
pub fn trip_distance_with(
    stops: &[Stop],
    origin: StopId,
    destination: StopId,
    config: &DistanceConfig,
) -> Result<Meters, DistanceError> {
    let selection = select_segment(stops, origin, destination)?;
    let total = path_distance_with(selection.iter().map(Stop::coordinate), config);

    debug!(
        %origin,
        %destination,
        stops = selection.len(),
        meters = total.value(),
        "computed trip distance"
    );

    Ok(total)
}
