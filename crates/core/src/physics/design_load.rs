//! Design snow load on the roof surface, EN 1991-1-3 eq. (5.1):
//! `s = μ1 × Ce × Ct × Sk`.

/// Design snow load `s` (kN/m²)
///
/// # Arguments
/// * `shape_coefficient` - Roof shape coefficient `μ1`
/// * `exposure_coefficient` - Exposure coefficient `Ce`
/// * `thermal_coefficient` - Thermal coefficient `Ct`
/// * `characteristic_snow_weight` - Characteristic ground load `Sk` (kN/m²)
#[inline]
pub fn design_snow_weight(
    shape_coefficient: f64,
    exposure_coefficient: f64,
    thermal_coefficient: f64,
    characteristic_snow_weight: f64,
) -> f64 {
    shape_coefficient * exposure_coefficient * thermal_coefficient * characteristic_snow_weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_product_of_factors() {
        assert_relative_eq!(design_snow_weight(0.8, 1.0, 1.0, 0.651), 0.5208, epsilon = 1e-12);
        assert_relative_eq!(design_snow_weight(0.4, 1.2, 1.1, 2.0), 1.056, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_shape_coefficient_clears_load() {
        assert_eq!(design_snow_weight(0.0, 2.0, 3.0, 4.0), 0.0);
    }

    #[test]
    fn test_linear_in_each_argument() {
        let base = [0.6, 1.2, 0.9, 1.7];
        let reference = design_snow_weight(base[0], base[1], base[2], base[3]);
        for i in 0..4 {
            let mut scaled = base;
            scaled[i] *= 3.0;
            let s = design_snow_weight(scaled[0], scaled[1], scaled[2], scaled[3]);
            assert_relative_eq!(s, reference * 3.0, epsilon = 1e-12);
        }
    }
}
