//! Summary of a selected trip segment.

use chrono::Duration;
use tracing::warn;

use crate::domain::{Meters, Stop};

/// Distance and planned timing of a run of stops.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSummary {
    /// Total distance over the selection
    pub distance: Meters,
    /// Number of stops in the selection, including both ends
    pub stops: usize,
    /// Planned time from departure at the first stop to arrival at the last
    pub planned_duration: Option<Duration>,
}

impl SegmentSummary {
    /// Build a summary for a selection whose distance is already known.
    ///
    /// The planned duration is only set when the first stop has a planned
    /// departure, the last stop a planned arrival, and arrival is not
    /// before departure.
    pub fn new(selection: &[Stop], distance: Meters) -> Self {
        Self {
            distance,
            stops: selection.len(),
            planned_duration: planned_duration(selection),
        }
    }

    /// Average speed over the planned duration, in km/h.
    ///
    /// Returns `None` without a planned duration or when it is zero.
    pub fn average_speed_kmh(&self) -> Option<f64> {
        let duration = self.planned_duration?;
        let seconds = duration.num_seconds();
        if seconds <= 0 {
            return None;
        }
        Some(self.distance.as_km() / (seconds as f64 / 3600.0))
    }
}

fn planned_duration(selection: &[Stop]) -> Option<Duration> {
    let (first, last) = (selection.first()?, selection.last()?);
    if selection.len() < 2 {
        return None;
    }

    let departure = first.planned_departure?;
    let arrival = last.planned_arrival?;
    let duration = arrival.signed_duration_since(departure);

    if duration < Duration::zero() {
        warn!(
            from = %first.id,
            to = %last.id,
            %departure,
            %arrival,
            "planned arrival precedes departure, ignoring timing"
        );
        return None;
    }

    Some(duration)
}
