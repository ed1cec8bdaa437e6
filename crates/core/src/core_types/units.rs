//! Semantic unit types for the calculator inputs
//!
//! Newtype wrappers keep parcel altitudes and roof angles from being passed
//! in each other's place. Both wrap `f64` and implement `Deref` so the
//! formulas can use the raw value directly.
//!
//! Constructors do not validate. Range checks live in
//! [`CalculationInput::validate`](crate::CalculationInput::validate) so a
//! bad value is reported as a [`CalculationError`](crate::CalculationError)
//! instead of a panic.
//!
//! # Usage
//! ```
//! use snow_load_core::core_types::units::{Degrees, Meters};
//!
//! let altitude = Meters::new(728.0);
//! assert_eq!(*altitude, 728.0);
//!
//! let angle = Degrees::new(45.0);
//! assert!(angle > Degrees::FLAT_ROOF_LIMIT);
//! assert!(angle < Degrees::SHEDDING_LIMIT);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Altitude above sea level in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Sea level
    pub const ZERO: Meters = Meters(0.0);

    /// Create a new altitude
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f64 {
    fn from(m: Meters) -> f64 {
        m.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

// ============================================================================
// ANGLE
// ============================================================================

/// Roof pitch in degrees from horizontal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Flat roof
    pub const ZERO: Degrees = Degrees(0.0);

    /// Steepest pitch that still carries the full 0.8 shape coefficient
    pub const FLAT_ROOF_LIMIT: Degrees = Degrees(30.0);

    /// Pitch from which snow is assumed to slide off entirely
    pub const SHEDDING_LIMIT: Degrees = Degrees(60.0);

    /// Vertical wall
    pub const VERTICAL: Degrees = Degrees(90.0);

    /// Create a new angle
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
