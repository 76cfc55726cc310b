//! Domain types for trip distance computation.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity. Trips and stops are
//! read-only snapshots; nothing here performs I/O.

mod coordinate;
mod error;
mod meters;
mod station;
mod stop;
mod trip;

pub use coordinate::{Axis, Coordinate, InvalidCoordinate};
pub use error::{DistanceError, Marker};
pub use meters::Meters;
pub use station::{Station, StationId};
pub use stop::{SequencePosition, Stop, StopId};
pub use trip::{InvalidTripId, Trip, TripId};
