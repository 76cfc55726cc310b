//! Trip snapshots handed over by the trip provider.
//!
//! A snapshot is a JSON document describing one trip with its stopovers
//! and the stations they call at. Snapshots are parsed into DTOs, then
//! converted into validated domain types.

mod convert;
mod dto;
mod error;

use std::path::Path;

use tracing::debug;

use crate::domain::Trip;

pub use convert::{ConversionError, convert_station, convert_stopover, convert_trip};
pub use dto::{StationDto, StopoverDto, TripDto};
pub use error::SnapshotError;

/// Parse a trip snapshot from a JSON string.
pub fn parse_trip(json: &str) -> Result<Trip, SnapshotError> {
    let dto: TripDto = serde_json::from_str(json)?;
    Ok(convert_trip(&dto)?)
}

/// Load a trip snapshot from a JSON file.
pub fn load_trip(path: impl AsRef<Path>) -> Result<Trip, SnapshotError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let trip = parse_trip(&contents)?;
    debug!(
        path = %path.display(),
        trip = %trip.id,
        stops = trip.len(),
        "loaded trip snapshot"
    );
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::compute_trip_distance;
    use crate::domain::{Meters, StopId};
    use tempfile::tempdir;

    const HANNOVER: &str = r#"{
        "trip_id": "1|2|3|4",
        "line_name": "xxx",
        "number": "xxx",
        "stopovers": [
            {
                "id": 1,
                "station": {"id": 1, "name": "Origin", "latitude": 52.379811, "longitude": 9.742779},
                "departure_planned": "2024-03-15T10:00:00+01:00"
            },
            {
                "id": 2,
                "station": {"id": 2, "name": "Destination", "latitude": 52.341994, "longitude": 9.718319},
                "arrival_planned": "2024-03-15T11:00:00+01:00"
            }
        ]
    }"#;

    #[test]
    fn parse_and_measure() {
        let trip = parse_trip(HANNOVER).unwrap();
        let d = compute_trip_distance(&trip.stops, StopId(1), StopId(2)).unwrap();
        assert_eq!(d, Meters::new(4526));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trip.json");
        std::fs::write(&path, HANNOVER).unwrap();

        let trip = load_trip(&path).unwrap();
        assert_eq!(trip.id.as_str(), "1|2|3|4");
        assert_eq!(trip.origin_name(), "Origin");
        assert_eq!(trip.destination_name(), "Destination");
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let err = load_trip(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            parse_trip("{ not json"),
            Err(SnapshotError::Json(_))
        ));
    }

    #[test]
    fn invalid_contents() {
        let json = r#"{"trip_id": "", "stopovers": []}"#;
        assert!(matches!(
            parse_trip(json),
            Err(SnapshotError::Conversion(ConversionError::InvalidTripId { .. }))
        ));
    }
}
