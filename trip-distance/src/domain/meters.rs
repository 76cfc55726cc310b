//! Whole-meter distance type.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative distance in whole meters.
///
/// # Examples
///
/// ```
/// use trip_distance::domain::Meters;
///
/// let total: Meters = [Meters::new(4000), Meters::new(526)].into_iter().sum();
/// assert_eq!(total, Meters::new(4526));
/// assert_eq!(total.to_string(), "4526 m");
/// assert_eq!(total.as_km(), 4.526);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Meters(u64);

impl Meters {
    pub const ZERO: Meters = Meters(0);

    pub fn new(value: u64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the distance in kilometers.
    pub fn as_km(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl From<u64> for Meters {
    fn from(value: u64) -> Self {
        Meters(value)
    }
}

impl From<Meters> for u64 {
    fn from(value: Meters) -> Self {
        value.0
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, other: Meters) -> Meters {
        Meters(self.0 + other.0)
    }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, other: Meters) {
        self.0 += other.0;
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Meters::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}
