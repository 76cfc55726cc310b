//! Distance calculation configuration.

use thiserror::Error;

/// Environment variable overriding the sphere radius.
pub const EARTH_RADIUS_ENV: &str = "TRIP_DISTANCE_EARTH_RADIUS_M";

/// WGS-84 equatorial radius in meters.
pub const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Largest accepted radius (meters).
///
/// Keeps every hop, and any realistic sum of hops, far inside `u64` meters.
pub const MAX_EARTH_RADIUS_M: f64 = 1.0e9;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} must be positive and at most {max}, got {value}", max = MAX_EARTH_RADIUS_M)]
    OutOfRange { name: &'static str, value: f64 },
}

/// Configuration parameters for distance calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConfig {
    /// Radius of the sphere the Earth is approximated by (meters).
    earth_radius_m: f64,
}

fn check_radius(earth_radius_m: f64) -> Result<f64, ConfigError> {
    // NaN fails the range check as well.
    if !(earth_radius_m > 0.0 && earth_radius_m <= MAX_EARTH_RADIUS_M) {
        return Err(ConfigError::OutOfRange {
            name: EARTH_RADIUS_ENV,
            value: earth_radius_m,
        });
    }
    Ok(earth_radius_m)
}

impl DistanceConfig {
    /// Create a new configuration with the given radius.
    pub fn new(earth_radius_m: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            earth_radius_m: check_radius(earth_radius_m)?,
        })
    }

    /// Set the radius on this configuration.
    pub fn with_earth_radius_m(mut self, earth_radius_m: f64) -> Result<Self, ConfigError> {
        self.earth_radius_m = check_radius(earth_radius_m)?;
        Ok(self)
    }

    /// Radius of the sphere in meters.
    pub fn earth_radius_m(&self) -> f64 {
        self.earth_radius_m
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(EARTH_RADIUS_ENV) {
            None => Ok(Self::default()),
            Some(raw) => {
                let radius = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::NotANumber {
                        name: EARTH_RADIUS_ENV,
                        value: raw.clone(),
                    })?;
                Self::default().with_earth_radius_m(radius)
            }
        }
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: WGS84_EQUATORIAL_RADIUS_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DistanceConfig::default();
        assert_eq!(config.earth_radius_m(), 6_378_137.0);
    }

    #[test]
    fn custom_config() {
        let config = DistanceConfig::new(6_371_000.0).unwrap();
        assert_eq!(config.earth_radius_m(), 6_371_000.0);

        let config = DistanceConfig::default()
            .with_earth_radius_m(1000.0)
            .unwrap();
        assert_eq!(config.earth_radius_m(), 1000.0);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(DistanceConfig::new(0.0).is_err());
        assert!(DistanceConfig::new(-1.0).is_err());
        assert!(DistanceConfig::new(f64::NAN).is_err());
        assert!(DistanceConfig::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_radius_above_cap() {
        assert_eq!(
            DistanceConfig::new(1.0e300).unwrap_err(),
            ConfigError::OutOfRange {
                name: EARTH_RADIUS_ENV,
                value: 1.0e300,
            }
        );
        assert!(DistanceConfig::new(MAX_EARTH_RADIUS_M).is_ok());
        assert!(DistanceConfig::new(MAX_EARTH_RADIUS_M * 1.5).is_err());

        let err = DistanceConfig::from_lookup(|_| Some("1e300".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
        assert!(
            err.to_string()
                .starts_with("TRIP_DISTANCE_EARTH_RADIUS_M must be positive and at most 1000000000, got 1000")
        );
    }

    #[test]
    fn builder_keeps_config_on_error() {
        let config = DistanceConfig::new(6_371_000.0).unwrap();
        let updated = config.with_earth_radius_m(6_000_000.0).unwrap();
        assert_eq!(updated.earth_radius_m(), 6_000_000.0);
        // Original is Copy and untouched.
        assert_eq!(config.earth_radius_m(), 6_371_000.0);
        assert!(config.with_earth_radius_m(-1.0).is_err());
    }

    #[test]
    fn lookup_unset_uses_default() {
        let config = DistanceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DistanceConfig::default());
    }

    #[test]
    fn lookup_reads_radius() {
        let config = DistanceConfig::from_lookup(|name| {
            assert_eq!(name, EARTH_RADIUS_ENV);
            Some(" 6371000 ".to_string())
        })
        .unwrap();
        assert_eq!(config.earth_radius_m(), 6_371_000.0);
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = DistanceConfig::from_lookup(|_| Some("far".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                name: EARTH_RADIUS_ENV,
                value: "far".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "TRIP_DISTANCE_EARTH_RADIUS_M is not a number: \"far\""
        );

        let err = DistanceConfig::from_lookup(|_| Some("-5".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }
}
