//! cepstrum::validation — input guards for the cepstrum transforms.

use ndarray::ArrayD;

use crate::{
    cepstrum::errors::{CepstrumError, CepstrumResult},
    utils::coefficient_len,
};

/// Validate that `x` ends in an axis of length `order + 1`.
///
/// Errors
/// ------
/// - `CepstrumError::MissingCoefficientAxis` for 0-d input.
/// - `CepstrumError::DimensionMismatch` when the trailing length differs.
pub fn validate_coefficient_axis<T>(
    x: &ArrayD<T>, order: usize, what: &'static str,
) -> CepstrumResult<()> {
    let found = coefficient_len(x).ok_or(CepstrumError::MissingCoefficientAxis)?;
    if found != order + 1 {
        return Err(CepstrumError::DimensionMismatch { what, expected: order + 1, found });
    }
    Ok(())
}

/// Validate a frequency warping factor: finite and `|alpha| < 1`.
///
/// Errors
/// ------
/// - `CepstrumError::InvalidAlpha` otherwise.
pub fn validate_alpha(alpha: f64) -> CepstrumResult<()> {
    if !alpha.is_finite() {
        return Err(CepstrumError::InvalidAlpha { value: alpha, reason: "Alpha must be finite." });
    }
    if alpha.abs() >= 1.0 {
        return Err(CepstrumError::InvalidAlpha {
            value: alpha,
            reason: "Alpha must satisfy |alpha| < 1.",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    // Purpose
    // -------
    // Cover the alpha guard at and inside the unit bound.
    //
    // Given
    // -----
    // - `alpha` in `{0.0, -0.99, 1.0, -1.0, inf}`.
    //
    // Expect
    // ------
    // - The first two pass, the rest fail with `InvalidAlpha`.
    fn alpha_must_be_inside_unit_interval() {
        assert!(validate_alpha(0.0).is_ok());
        assert!(validate_alpha(-0.99).is_ok());
        for bad in [1.0, -1.0, f64::INFINITY] {
            assert!(matches!(validate_alpha(bad), Err(CepstrumError::InvalidAlpha { .. })));
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the trailing-axis guard.
    //
    // Given
    // -----
    // - A 0-d array and a `[2, 5]` batch checked against orders 4 and 3.
    //
    // Expect
    // ------
    // - `MissingCoefficientAxis`, `Ok`, and `DimensionMismatch`.
    fn coefficient_axis_checks() {
        let scalar = ArrayD::<f64>::zeros(IxDyn(&[]));
        assert_eq!(
            validate_coefficient_axis(&scalar, 0, "cepstrum"),
            Err(CepstrumError::MissingCoefficientAxis)
        );

        let batch = ArrayD::<f64>::zeros(IxDyn(&[2, 5]));
        assert!(validate_coefficient_axis(&batch, 4, "cepstrum").is_ok());
        assert_eq!(
            validate_coefficient_axis(&batch, 3, "cepstrum"),
            Err(CepstrumError::DimensionMismatch { what: "cepstrum", expected: 4, found: 5 })
        );
    }
}
