//! Geographic coordinate type.

use std::fmt;

/// Which component of a coordinate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Error returned when constructing a coordinate from illegal values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid coordinate: {axis} {value} {reason}")]
pub struct InvalidCoordinate {
    axis: Axis,
    value: f64,
    reason: &'static str,
}

impl InvalidCoordinate {
    /// The component that was rejected.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The rejected value, in degrees.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A point on the Earth's surface, in degrees.
///
/// Latitude is within `[-90, 90]` and longitude within `[-180, 180]`,
/// both finite. Any `Coordinate` value satisfies this by construction.
///
/// # Examples
///
/// ```
/// use trip_distance::domain::Coordinate;
///
/// let hannover = Coordinate::new(52.376589, 9.741083).unwrap();
/// assert_eq!(hannover.latitude(), 52.376589);
/// assert_eq!(hannover.longitude(), 9.741083);
///
/// // Out of range
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -180.5).is_err());
///
/// // Not a number
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        check(Axis::Latitude, latitude, 90.0, "must be within [-90, 90]")?;
        check(Axis::Longitude, longitude, 180.0, "must be within [-180, 180]")?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

fn check(
    axis: Axis,
    value: f64,
    limit: f64,
    out_of_range: &'static str,
) -> Result<(), InvalidCoordinate> {
    if !value.is_finite() {
        return Err(InvalidCoordinate {
            axis,
            value,
            reason: "must be finite",
        });
    }
    if !(-limit..=limit).contains(&value) {
        return Err(InvalidCoordinate {
            axis,
            value,
            reason: out_of_range,
        });
    }
    Ok(())
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_values() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(52.376589, 9.741083).is_ok());
        assert!(Coordinate::new(-33.8688, 151.2093).is_ok());
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        let err = Coordinate::new(90.000001, 0.0).unwrap_err();
        assert_eq!(err.axis(), Axis::Latitude);
        assert_eq!(err.value(), 90.000001);

        assert!(Coordinate::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        let err = Coordinate::new(0.0, 180.5).unwrap_err();
        assert_eq!(err.axis(), Axis::Longitude);

        assert!(Coordinate::new(0.0, -181.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
        assert!(Coordinate::new(f64::INFINITY, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn latitude_checked_first() {
        let err = Coordinate::new(100.0, 200.0).unwrap_err();
        assert_eq!(err.axis(), Axis::Latitude);
    }

    #[test]
    fn error_display() {
        let err = Coordinate::new(95.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate: latitude 95 must be within [-90, 90]"
        );

        let err = Coordinate::new(0.0, f64::INFINITY).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate: longitude inf must be finite"
        );
    }

    #[test]
    fn display() {
        let c = Coordinate::new(50.5, -3.25).unwrap();
        assert_eq!(c.to_string(), "(50.5, -3.25)");
    }

    #[test]
    fn equality_by_value() {
        let a = Coordinate::new(48.880886, 2.354931).unwrap();
        let b = Coordinate::new(48.880886, 2.354931).unwrap();
        let c = Coordinate::new(50.637486, 3.071129).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
