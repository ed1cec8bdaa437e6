//! Snow Load Core Library
//!
//! Roof snow load estimate from exposure coefficient, thermal coefficient,
//! parcel altitude, parcel zone and roof angle, following the Eurocode
//! EN 1991-1-3 formulas for the Alpine and Mediterranean zones.
//!
//! ## Formulas
//!
//! - Characteristic ground load: `Sk = k × (1 + (A / A0)²)` per zone
//! - Roof shape coefficient `μ1`: 0.8 up to 30°, linear to 0 at 60°
//! - Design roof load: `s = μ1 × Ce × Ct × Sk`
//!
//! Everything is pure arithmetic on a validated [`CalculationInput`].

// Core types and utilities
pub mod core_types;

pub mod calculator;
pub mod error;
pub mod physics;

// Re-export core types
pub use core_types::{Degrees, Meters, ParcelZone, ZoneConstants};

pub use calculator::{
    compute, CalculationInput, CalculationResult, CalculatorConfig, SnowLoadCalculator,
};
pub use error::CalculationError;
pub use physics::{
    characteristic_snow_weight, characteristic_snow_weight_with, design_snow_weight,
    roof_shape_coefficient, AltitudeTerm, DEFAULT_ALTITUDE_TERM,
};
