//! Roof shape coefficient `μ1` for monopitch and duopitch roofs.
//!
//! Follows EN 1991-1-3 Table 5.2: snow is fully retained up to 30°, sheds
//! linearly between 30° and 60°, and is assumed to slide off entirely from
//! 60° upward.
//!
//! The legacy web form only accepted whole degrees and tested the middle
//! branch as `31 ≤ α ≤ 59`, leaving ]30, 31[ unhandled. Here the middle
//! branch covers the whole open interval ]30, 60[, which keeps the
//! coefficient continuous at both ends.

use crate::core_types::Degrees;

/// Shape coefficient on a flat or shallow roof
pub const FLAT_SHAPE_COEFFICIENT: f64 = 0.8;

/// Shape coefficient `μ1` for a roof pitch
///
/// Angles are expected in [0, 90]; range checks happen in
/// [`CalculationInput::validate`](crate::CalculationInput::validate).
///
/// # Example
/// ```
/// use snow_load_core::{roof_shape_coefficient, Degrees};
///
/// assert_eq!(roof_shape_coefficient(Degrees::new(30.0)), 0.8);
/// assert!((roof_shape_coefficient(Degrees::new(45.0)) - 0.4).abs() < 1e-12);
/// assert_eq!(roof_shape_coefficient(Degrees::new(60.0)), 0.0);
/// ```
pub fn roof_shape_coefficient(angle: Degrees) -> f64 {
    let alpha = *angle;
    if alpha <= *Degrees::FLAT_ROOF_LIMIT {
        FLAT_SHAPE_COEFFICIENT
    } else if alpha < *Degrees::SHEDDING_LIMIT {
        FLAT_SHAPE_COEFFICIENT * (*Degrees::SHEDDING_LIMIT - alpha) / 30.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_branch_values() {
        assert_eq!(roof_shape_coefficient(Degrees::ZERO), 0.8);
        assert_eq!(roof_shape_coefficient(Degrees::new(30.0)), 0.8);
        assert_relative_eq!(roof_shape_coefficient(Degrees::new(45.0)), 0.4, epsilon = 1e-12);
        assert_eq!(roof_shape_coefficient(Degrees::new(60.0)), 0.0);
        assert_eq!(roof_shape_coefficient(Degrees::VERTICAL), 0.0);
    }

    #[test]
    fn test_whole_degree_values_match_web_form() {
        // 31..=59 used 0.8 * (60 - a) / 30 in the web form
        for a in 31..=59 {
            let alpha = f64::from(a);
            assert_relative_eq!(
                roof_shape_coefficient(Degrees::new(alpha)),
                0.8 * (60.0 - alpha) / 30.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_gap_between_30_and_31_is_closed() {
        let mu = roof_shape_coefficient(Degrees::new(30.5));
        assert_relative_eq!(mu, 0.8 * 29.5 / 30.0, epsilon = 1e-12);
        assert!(mu < 0.8);
        assert!(mu > roof_shape_coefficient(Degrees::new(31.0)));
    }

    #[test]
    fn test_continuous_at_breakpoints() {
        let eps = 1e-9;
        let below_30 = roof_shape_coefficient(Degrees::new(30.0 - eps));
        let above_30 = roof_shape_coefficient(Degrees::new(30.0 + eps));
        assert!((below_30 - above_30).abs() < 1e-6);

        let below_60 = roof_shape_coefficient(Degrees::new(60.0 - eps));
        let above_60 = roof_shape_coefficient(Degrees::new(60.0 + eps));
        assert!((below_60 - above_60).abs() < 1e-6);
    }
}
