//! Snow load calculator
//!
//! Composes the three formulas in [`crate::physics`] behind a validated,
//! typed input:
//!
//! 1. `Sk` from zone and altitude
//! 2. `μ1` from roof angle
//! 3. `s = μ1 × Ce × Ct × Sk`
//!
//! The calculator holds only immutable configuration, so the same input
//! always yields a bit-identical result.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core_types::{Degrees, Meters, ParcelZone};
use crate::error::CalculationError;
use crate::physics::{
    characteristic_snow_weight_with, design_snow_weight, roof_shape_coefficient, AltitudeTerm,
    DEFAULT_ALTITUDE_TERM,
};

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Altitude term of the characteristic load formula
    pub altitude_term: AltitudeTerm,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            altitude_term: DEFAULT_ALTITUDE_TERM,
        }
    }
}

/// Inputs for one snow load calculation
///
/// `Default` gives the starting values of the legacy web form:
/// `Ce = 1`, `Ct = 1`, 1 m altitude, zone A1 and a 30° roof.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Exposure coefficient `Ce` (> 0)
    pub exposure_coefficient: f64,
    /// Thermal coefficient `Ct` (> 0)
    pub thermal_coefficient: f64,
    /// Parcel altitude above sea level (≥ 0)
    pub parcel_altitude: Meters,
    /// Parcel snow zone
    pub parcel_zone: ParcelZone,
    /// Roof pitch, in [0, 90]
    pub roof_angle: Degrees,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            exposure_coefficient: 1.0,
            thermal_coefficient: 1.0,
            parcel_altitude: Meters::new(1.0),
            parcel_zone: ParcelZone::A1,
            roof_angle: Degrees::FLAT_ROOF_LIMIT,
        }
    }
}

impl CalculationInput {
    /// Check every field against its allowed range
    ///
    /// Coefficients are checked before altitude, altitude before angle, so
    /// the reported error is stable when several fields are bad.
    ///
    /// # Errors
    /// - [`CalculationError::InvalidCoefficient`] for a non-positive or
    ///   non-finite `Ce`/`Ct`, or a negative or non-finite altitude
    /// - [`CalculationError::InvalidAngle`] for an angle outside [0, 90]
    pub fn validate(&self) -> Result<(), CalculationError> {
        check_positive("exposure_coefficient", self.exposure_coefficient)?;
        check_positive("thermal_coefficient", self.thermal_coefficient)?;

        let altitude = *self.parcel_altitude;
        if !altitude.is_finite() || altitude < 0.0 {
            return Err(CalculationError::InvalidCoefficient {
                name: "parcel_altitude",
                value: altitude,
            });
        }

        let angle = *self.roof_angle;
        if !(*Degrees::ZERO..=*Degrees::VERTICAL).contains(&angle) {
            // NaN fails the range check too
            return Err(CalculationError::InvalidAngle(angle));
        }

        Ok(())
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), CalculationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalculationError::InvalidCoefficient { name, value })
    }
}

/// Output of one snow load calculation (kN/m²)
///
/// `Default` is the all-zero state the web form showed after a reset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Characteristic ground load `Sk`
    pub characteristic_snow_weight: f64,
    /// Roof shape coefficient `μ1` (dimensionless)
    pub shape_coefficient: f64,
    /// Design roof load `s`
    pub design_snow_weight: f64,
}

/// Stateless snow load calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowLoadCalculator {
    config: CalculatorConfig,
}

impl SnowLoadCalculator {
    /// Create a calculator from configuration
    pub fn new(config: CalculatorConfig) -> Self {
        if config.altitude_term == AltitudeTerm::LegacyXor {
            warn!(
                "using legacy XOR altitude term; characteristic loads will not follow (A/A0)^2"
            );
        }
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Characteristic ground load `Sk` under this calculator's altitude term
    pub fn characteristic_snow_weight(&self, zone: ParcelZone, altitude: Meters) -> f64 {
        characteristic_snow_weight_with(zone, altitude, self.config.altitude_term)
    }

    /// Validate `input` and compute `Sk`, `μ1` and `s`
    ///
    /// # Errors
    /// Any error from [`CalculationInput::validate`]. No partial result is
    /// produced.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult, CalculationError> {
        input.validate()?;

        let characteristic = self.characteristic_snow_weight(input.parcel_zone, input.parcel_altitude);
        let shape = roof_shape_coefficient(input.roof_angle);
        let design = design_snow_weight(
            shape,
            input.exposure_coefficient,
            input.thermal_coefficient,
            characteristic,
        );

        debug!(
            zone = %input.parcel_zone,
            altitude = *input.parcel_altitude,
            angle = *input.roof_angle,
            sk = characteristic,
            mu = shape,
            s = design,
            "computed snow load"
        );

        Ok(CalculationResult {
            characteristic_snow_weight: characteristic,
            shape_coefficient: shape,
            design_snow_weight: design,
        })
    }
}

/// Compute with the default configuration
///
/// # Errors
/// See [`SnowLoadCalculator::compute`].
///
/// # Example
/// ```
/// use snow_load_core::{compute, CalculationInput, Degrees, Meters, ParcelZone};
///
/// let input = CalculationInput {
///     exposure_coefficient: 1.0,
///     thermal_coefficient: 1.0,
///     parcel_altitude: Meters::ZERO,
///     parcel_zone: ParcelZone::A1,
///     roof_angle: Degrees::new(30.0),
/// };
/// let result = compute(&input).unwrap();
/// assert!((result.design_snow_weight - 0.5208).abs() < 1e-12);
/// ```
pub fn compute(input: &CalculationInput) -> Result<CalculationResult, CalculationError> {
    SnowLoadCalculator::default().compute(input)
}
