//! Conversion from snapshot DTOs to domain types.

use chrono::{DateTime, FixedOffset};

use crate::domain::{
    Coordinate, InvalidCoordinate, InvalidTripId, SequencePosition, Station, StationId, Stop,
    StopId, Trip, TripId,
};

use super::dto::{StationDto, StopoverDto, TripDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Trip id rejected
    #[error("invalid trip id {value:?}: {source}")]
    InvalidTripId {
        value: String,
        #[source]
        source: InvalidTripId,
    },

    /// Station coordinates out of range
    #[error("station {station}: {source}")]
    InvalidCoordinate {
        station: u64,
        #[source]
        source: InvalidCoordinate,
    },

    /// Failed to parse a timestamp
    #[error("stopover {stopover}: invalid {field} time {value:?}")]
    InvalidTime {
        stopover: u64,
        field: &'static str,
        value: String,
    },

    /// Too many stopovers to number by index
    #[error("stopover {stopover}: index {index} does not fit a sequence position")]
    PositionOverflow { stopover: u64, index: usize },
}

/// Convert a trip snapshot to domain types.
///
/// Stop order is kept as given; ordering is checked when distances are
/// computed, not here.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    let id =
        TripId::new(dto.trip_id.clone()).map_err(|source| ConversionError::InvalidTripId {
            value: dto.trip_id.clone(),
            source,
        })?;

    let stops = dto
        .stopovers
        .iter()
        .enumerate()
        .map(|(index, stopover)| convert_stopover(stopover, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Trip {
        id,
        line_name: dto.line_name.clone(),
        number: dto.number.clone(),
        stops,
    })
}

/// Convert a single stopover; `index` is its place in the snapshot.
pub fn convert_stopover(dto: &StopoverDto, index: usize) -> Result<Stop, ConversionError> {
    let position = match dto.sequence {
        Some(sequence) => sequence,
        None => u32::try_from(index).map_err(|_| ConversionError::PositionOverflow {
            stopover: dto.id,
            index,
        })?,
    };

    Ok(Stop {
        id: StopId(dto.id),
        position: SequencePosition(position),
        station: convert_station(&dto.station)?,
        planned_arrival: parse_time(dto.id, "arrival", dto.arrival_planned.as_deref())?,
        planned_departure: parse_time(dto.id, "departure", dto.departure_planned.as_deref())?,
    })
}

/// Convert a station, validating its coordinates.
pub fn convert_station(dto: &StationDto) -> Result<Station, ConversionError> {
    let coordinate = Coordinate::new(dto.latitude, dto.longitude).map_err(|source| {
        ConversionError::InvalidCoordinate {
            station: dto.id,
            source,
        }
    })?;
    Ok(Station::new(StationId(dto.id), dto.name.clone(), coordinate))
}

fn parse_time(
    stopover: u64,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, ConversionError> {
    value
        .map(|s| {
            DateTime::parse_from_rfc3339(s).map_err(|_| ConversionError::InvalidTime {
                stopover,
                field,
                value: s.to_string(),
            })
        })
        .transpose()
}
