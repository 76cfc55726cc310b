//! Data transfer objects for trip snapshots.
//!
//! These mirror the JSON a trip provider hands over: raw numbers and
//! strings, validated only when converted to domain types.

use serde::{Deserialize, Serialize};

/// A trip and its stopovers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDto {
    /// Provider trip identifier (e.g., "1|2|3|4")
    pub trip_id: String,

    /// Line name (e.g., "RE 2")
    #[serde(default)]
    pub line_name: String,

    /// Journey number
    #[serde(default)]
    pub number: String,

    /// Stopovers in trip order
    pub stopovers: Vec<StopoverDto>,
}

/// A single stopover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopoverDto {
    /// Stopover identity, used as origin/destination marker
    pub id: u64,

    /// Position in the trip; defaults to the index in `stopovers`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,

    /// Station the trip stops at
    pub station: StationDto,

    /// Planned arrival, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_planned: Option<String>,

    /// Planned departure, RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_planned: Option<String>,
}

/// A station with raw coordinates in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDto {
    /// Station number (IBNR)
    pub id: u64,

    /// Display name
    pub name: String,

    pub latitude: f64,

    pub longitude: f64,
}
