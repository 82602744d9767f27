//! lpc::validation — shared input guards for the LPC transforms.
//!
//! Purpose
//! -------
//! Centralize the precondition checks every LPC component performs before
//! touching its recursion: presence of a coefficient axis, trailing
//! dimension `order + 1`, and gain positivity.
//!
//! Conventions
//! -----------
//! - Checks run before any computation and fail fast with [`LpcError`].
//! - Numerical conditioning is deliberately *not* checked here.

use ndarray::{ArrayD, Axis};

use crate::{
    lpc::errors::{LpcError, LpcResult},
    numerics::scalar::Scalar,
    utils::coefficient_len,
};

/// Validate that `x` carries a trailing coefficient axis of length `order + 1`.
///
/// Errors
/// ------
/// - `LpcError::MissingCoefficientAxis` for 0-d input.
/// - `LpcError::DimensionMismatch` when the trailing length differs.
pub fn validate_coefficient_axis<T>(
    x: &ArrayD<T>, order: usize, what: &'static str,
) -> LpcResult<()> {
    let found = coefficient_len(x).ok_or(LpcError::MissingCoefficientAxis)?;
    if found != order + 1 {
        return Err(LpcError::DimensionMismatch { what, expected: order + 1, found });
    }
    Ok(())
}

/// Validate that every lane's gain `x[..., 0]` is strictly positive.
///
/// Non-finite gains fail the check. Assumes the coefficient axis has already been
/// validated (non-empty trailing axis).
///
/// Errors
/// ------
/// - `LpcError::NonPositiveGain` for the first offending lane.
pub fn validate_gain<T: Scalar>(x: &ArrayD<T>) -> LpcResult<()> {
    let axis = Axis(x.ndim() - 1);
    for (lane, gain) in x.index_axis(axis, 0).iter().enumerate() {
        let value = gain.to_f64();
        if !value.is_finite() || value <= 0.0 {
            return Err(LpcError::NonPositiveGain { lane, value });
        }
    }
    Ok(())
}

/// Validate a stability margin: finite and strictly inside (0, 1).
///
/// Errors
/// ------
/// - `LpcError::InvalidMargin` otherwise.
pub fn validate_margin(margin: f64) -> LpcResult<()> {
    if !margin.is_finite() {
        return Err(LpcError::InvalidMargin { value: margin, reason: "Margin must be finite." });
    }
    if margin <= 0.0 || margin >= 1.0 {
        return Err(LpcError::InvalidMargin {
            value: margin,
            reason: "Margin must lie strictly between 0 and 1.",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{IxDyn, array};

    #[test]
    // Purpose
    // -------
    // Cover every branch of `validate_coefficient_axis`.
    //
    // Given
    // -----
    // - A 0-d array, a batch with the wrong trailing length, and a valid batch.
    //
    // Expect
    // ------
    // - `MissingCoefficientAxis`, `DimensionMismatch`, and `Ok(())`.
    fn coefficient_axis_checks() {
        let scalar = ArrayD::<f64>::zeros(IxDyn(&[]));
        assert_eq!(
            validate_coefficient_axis(&scalar, 2, "LPC coefficients"),
            Err(LpcError::MissingCoefficientAxis)
        );

        let batch = ArrayD::<f64>::zeros(IxDyn(&[4, 3]));
        assert_eq!(
            validate_coefficient_axis(&batch, 3, "LPC coefficients"),
            Err(LpcError::DimensionMismatch { what: "LPC coefficients", expected: 4, found: 3 })
        );
        assert!(validate_coefficient_axis(&batch, 2, "LPC coefficients").is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure the gain check reports the first non-positive or NaN lane.
    //
    // Given
    // -----
    // - Three lanes with gains `1.0`, `0.0`, `NaN`.
    //
    // Expect
    // ------
    // - `NonPositiveGain { lane: 1, value: 0.0 }`.
    fn gain_check_reports_first_bad_lane() {
        let a = array![[1.0_f64, 0.1], [0.0, 0.2], [f64::NAN, 0.3]].into_dyn();
        assert_eq!(validate_gain(&a), Err(LpcError::NonPositiveGain { lane: 1, value: 0.0 }));

        let ok = array![[0.5_f64, -0.9], [2.0, 0.0]].into_dyn();
        assert!(validate_gain(&ok).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Check margin bounds are exclusive and non-finite margins are rejected.
    //
    // Given
    // -----
    // - Margins `0`, `1`, `NaN`, and `1e-16`.
    //
    // Expect
    // ------
    // - Only `1e-16` is accepted.
    fn margin_bounds_are_exclusive() {
        assert!(matches!(validate_margin(0.0), Err(LpcError::InvalidMargin { .. })));
        assert!(matches!(validate_margin(1.0), Err(LpcError::InvalidMargin { .. })));
        assert!(matches!(validate_margin(f64::NAN), Err(LpcError::InvalidMargin { .. })));
        assert!(validate_margin(1e-16).is_ok());
    }
}
