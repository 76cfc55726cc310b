//! Great-circle distance between two coordinates.
//!
//! Uses the haversine formula on a spherical Earth. The radius comes from
//! [`DistanceConfig`]; the default is the WGS-84 equatorial radius.

use crate::domain::{Coordinate, Meters};

use super::config::DistanceConfig;

/// Central angle between two coordinates, in radians.
fn central_angle(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h slightly past 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in meters, unrounded.
pub fn haversine_m(a: Coordinate, b: Coordinate, earth_radius_m: f64) -> f64 {
    earth_radius_m * central_angle(a, b)
}

/// Great-circle distance rounded to the nearest meter.
///
/// Symmetric, and exactly zero for identical coordinates.
pub fn segment_distance(a: Coordinate, b: Coordinate, config: &DistanceConfig) -> Meters {
    let meters = haversine_m(a, b, config.earth_radius_m()).round();
    Meters::new(meters as u64)
}

/// A straight hop between two coordinates.
///
/// # Examples
///
/// ```
/// use trip_distance::distance::LineSegment;
/// use trip_distance::domain::{Coordinate, Meters};
///
/// let segment = LineSegment::new(
///     Coordinate::new(52.376589, 9.741083).unwrap(),
///     Coordinate::new(52.374497, 9.738573).unwrap(),
/// );
/// assert_eq!(segment.distance(), Meters::new(289));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl LineSegment {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self { from, to }
    }

    /// Distance using the default configuration.
    pub fn distance(&self) -> Meters {
        self.distance_with(&DistanceConfig::default())
    }

    /// Distance using the given configuration.
    pub fn distance_with(&self, config: &DistanceConfig) -> Meters {
        segment_distance(self.from, self.to, config)
    }

    /// The same segment traversed the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
    }

    proptest! {
        /// distance(a, b) == distance(b, a)
        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            let config = DistanceConfig::default();
            prop_assert_eq!(segment_distance(a, b, &config), segment_distance(b, a, &config));
        }

        /// distance(a, a) == 0
        #[test]
        fn zero_to_self(a in coordinate()) {
            prop_assert_eq!(segment_distance(a, a, &DistanceConfig::default()), Meters::ZERO);
        }

        /// Never longer than half the circumference
        #[test]
        fn bounded_by_half_circumference(a in coordinate(), b in coordinate()) {
            let config = DistanceConfig::default();
            let d = haversine_m(a, b, config.earth_radius_m());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * config.earth_radius_m() + 1e-6);
        }

        /// Direct hop is never longer than a detour through a third point
        #[test]
        fn triangle_inequality(a in coordinate(), b in coordinate(), c in coordinate()) {
            let r = DistanceConfig::default().earth_radius_m();
            let direct = haversine_m(a, c, r);
            let detour = haversine_m(a, b, r) + haversine_m(b, c, r);
            prop_assert!(direct <= detour + 1e-3);
        }
    }
}
