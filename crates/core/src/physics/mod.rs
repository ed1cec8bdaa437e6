//! Snow load formulas
//!
//! - [`snow_weight`]: characteristic ground load `Sk` per zone and altitude
//! - [`roof_shape`]: shape coefficient `μ1` from roof pitch
//! - [`design_load`]: design roof load `s = μ1 Ce Ct Sk`

pub mod design_load;
pub mod roof_shape;
pub mod snow_weight;

pub use design_load::design_snow_weight;
pub use roof_shape::{roof_shape_coefficient, FLAT_SHAPE_COEFFICIENT};
pub use snow_weight::{
    characteristic_snow_weight, characteristic_snow_weight_with, AltitudeTerm,
    DEFAULT_ALTITUDE_TERM,
};
