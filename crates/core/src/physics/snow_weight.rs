//! Characteristic ground snow load by zone and altitude.
//!
//! Implements the altitude correlation of EN 1991-1-3 Annex C for the
//! Alpine (zones A1 to A4) and Mediterranean (zone M1) regions:
//!
//! ```text
//! Sk = k × (1 + (A / A0)²)
//! ```
//!
//! where `k` and `A0` come from the zone table in
//! [`ParcelZone::constants`](crate::ParcelZone::constants) and `A` is the
//! parcel altitude in meters.
//!
//! # Legacy altitude term
//!
//! The web form this calculator replaces wrote the altitude term as
//! `(A / A0) ^ 2` in a language where `^` is bitwise XOR. Its literal output
//! truncates the ratio to a signed 32-bit integer and XORs it with 2, so a
//! sea-level parcel in A1 reads `0.651 × 3` instead of `0.651`.
//! [`AltitudeTerm::LegacyXor`] reproduces that output for side-by-side
//! comparison. [`DEFAULT_ALTITUDE_TERM`] is the squared ratio.
//!
//! # References
//!
//! - EN 1991-1-3:2003, Eurocode 1: Actions on structures, Part 1-3: Snow
//!   loads. Annex C, Table C.1.

use serde::{Deserialize, Serialize};

use crate::core_types::{Meters, ParcelZone};

/// How the altitude ratio `A / A0` enters the characteristic load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AltitudeTerm {
    /// `(A / A0)²`
    #[default]
    SquaredRatio,
    /// `ToInt32(A / A0) XOR 2`, bit-exact with the legacy web form
    LegacyXor,
}

/// Altitude term used when no configuration says otherwise
pub const DEFAULT_ALTITUDE_TERM: AltitudeTerm = AltitudeTerm::SquaredRatio;

impl AltitudeTerm {
    /// Evaluate the term for an altitude ratio `A / A0`
    #[inline]
    pub fn evaluate(self, ratio: f64) -> f64 {
        match self {
            AltitudeTerm::SquaredRatio => ratio * ratio,
            AltitudeTerm::LegacyXor => f64::from(to_int32(ratio) ^ 2),
        }
    }
}

/// `ECMAScript` `ToInt32`: truncate toward zero, wrap modulo 2³².
/// Non-finite input maps to 0.
fn to_int32(value: f64) -> i32 {
    const TWO_32: f64 = 4_294_967_296.0;
    const TWO_31: f64 = 2_147_483_648.0;

    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_32);
    let signed = if wrapped >= TWO_31 {
        wrapped - TWO_32
    } else {
        wrapped
    };
    signed as i32
}

/// Characteristic snow load `Sk` (kN/m²) using the squared-ratio term
///
/// # Arguments
/// * `zone` - Parcel snow zone
/// * `altitude` - Parcel altitude above sea level
///
/// # Example
/// ```
/// use snow_load_core::{characteristic_snow_weight, Meters, ParcelZone};
///
/// let sk = characteristic_snow_weight(ParcelZone::A1, Meters::new(728.0));
/// assert!((sk - 1.302).abs() < 1e-12);
/// ```
#[inline]
pub fn characteristic_snow_weight(zone: ParcelZone, altitude: Meters) -> f64 {
    characteristic_snow_weight_with(zone, altitude, DEFAULT_ALTITUDE_TERM)
}

/// Characteristic snow load `Sk` (kN/m²) with an explicit altitude term
pub fn characteristic_snow_weight_with(zone: ParcelZone, altitude: Meters, term: AltitudeTerm) -> f64 {
    let constants = zone.constants();
    let ratio = *altitude / constants.reference_altitude;
    constants.coefficient * (1.0 + term.evaluate(ratio))
}
