//! Validation errors raised at the calculator boundary.

use thiserror::Error;

/// Failure to compute a snow load from the given input.
///
/// Every variant is a local validation failure. Validation runs before any
/// arithmetic, so an error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Zone name or index outside {A1, A2, A3, A4, M1}.
    #[error("invalid parcel zone '{0}' (expected one of A1, A2, A3, A4, M1)")]
    InvalidZone(String),

    /// Roof angle outside [0, 90] degrees, or not finite.
    #[error("invalid roof angle {0}° (expected a finite value in [0, 90])")]
    InvalidAngle(f64),

    /// Exposure or thermal coefficient not strictly positive, or parcel
    /// altitude negative. Non-finite values of any of the three land here too.
    #[error("invalid {name}: {value}")]
    InvalidCoefficient {
        /// Name of the offending input field
        name: &'static str,
        /// Value as supplied by the caller
        value: f64,
    },
}

impl CalculationError {
    /// Short machine-readable kind, used by the C ABI and the CLI exit report.
    pub fn kind(&self) -> &'static str {
        match self {
            CalculationError::InvalidZone(_) => "invalid-zone",
            CalculationError::InvalidAngle(_) => "invalid-angle",
            CalculationError::InvalidCoefficient { .. } => "invalid-coefficient",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = CalculationError::InvalidCoefficient {
            name: "exposure_coefficient",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid exposure_coefficient: -1");
        assert_eq!(err.kind(), "invalid-coefficient");
    }

    #[test]
    fn test_zone_message() {
        let err = CalculationError::InvalidZone("B1".to_string());
        assert!(err.to_string().contains("'B1'"));
        assert_eq!(err.kind(), "invalid-zone");
    }
}
