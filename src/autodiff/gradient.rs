//! Gradients of scalar losses through the transforms.
//!
//! Purpose
//! -------
//! Evaluate `∂L/∂x` for a scalar loss `L` built from any [`Scalar`]-generic
//! transform, and cross-check it against a central finite-difference
//! approximation.
//!
//! Key behaviors
//! -------------
//! - [`gradient`] runs one forward-mode pass per input element, seeding a unit
//!   tangent at that element; cost is `O(n)` evaluations of `f`.
//! - [`check_gradient`] compares [`gradient`] with `finitediff`'s central
//!   differences and reports the first disagreement.
//!
//! Conventions
//! -----------
//! - Element order is the logical (row-major) order of `x`; returned
//!   gradients have the shape of `x`.
//! - Finite differences evaluate the same closure on constant duals, so a
//!   single closure serves both paths.

use finitediff::FiniteDiff;
use ndarray::ArrayD;

use crate::autodiff::{
    dual::Dual,
    errors::{GradientError, GradientResult},
};

/// gradient — forward-mode gradient of a scalar loss.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayD<f64>`
///   Evaluation point; any shape with at least one element.
/// - `f`: `F`
///   Loss evaluated on dual-valued inputs.
///
/// Returns
/// -------
/// `GradientResult<ArrayD<f64>>`
///   `∂f/∂x` with the shape of `x`.
///
/// Errors
/// ------
/// - `GradientError::EmptyInput` when `x` has no elements.
pub fn gradient<F>(x: &ArrayD<f64>, f: F) -> GradientResult<ArrayD<f64>>
where
    F: Fn(&ArrayD<Dual>) -> Dual,
{
    if x.is_empty() {
        return Err(GradientError::EmptyInput);
    }
    let mut grad = x.mapv(|_| 0.0);
    for (seed, g) in grad.iter_mut().enumerate() {
        let mut dual = x.mapv(Dual::constant);
        if let Some(e) = dual.iter_mut().nth(seed) {
            e.eps = 1.0;
        }
        *g = f(&dual).eps;
    }
    Ok(grad)
}

/// check_gradient — forward-mode gradient validated against finite differences.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayD<f64>`
///   Evaluation point.
/// - `f`: `F`
///   Loss evaluated on dual-valued inputs.
/// - `tolerance`: `f64`
///   Mixed absolute/relative tolerance: entries agree when
///   `|g - g_fd| <= tolerance · max(1, |g_fd|)`.
///
/// Returns
/// -------
/// `GradientResult<ArrayD<f64>>`
///   The forward-mode gradient when every entry is finite and agrees with
///   the central finite-difference gradient.
///
/// Errors
/// ------
/// - `GradientError::InvalidTolerance` for non-finite or non-positive
///   `tolerance`.
/// - `GradientError::EmptyInput` when `x` has no elements.
/// - `GradientError::NonFiniteGradient` for the first NaN/±inf entry.
/// - `GradientError::GradientMismatch` for the first disagreeing entry.
pub fn check_gradient<F>(x: &ArrayD<f64>, f: F, tolerance: f64) -> GradientResult<ArrayD<f64>>
where
    F: Fn(&ArrayD<Dual>) -> Dual,
{
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(GradientError::InvalidTolerance { value: tolerance });
    }
    let analytic = gradient(x, &f)?;

    let point: Vec<f64> = x.iter().copied().collect();
    let loss = |p: &Vec<f64>| f(&constants_like(x, p)).re;
    let numeric = point.central_diff(&loss);

    for (index, (&g, &g_fd)) in analytic.iter().zip(numeric.iter()).enumerate() {
        if !g.is_finite() {
            return Err(GradientError::NonFiniteGradient { index, value: g });
        }
        if (g - g_fd).abs() > tolerance * g_fd.abs().max(1.0) {
            return Err(GradientError::GradientMismatch {
                index,
                analytic: g,
                numeric: g_fd,
                tolerance,
            });
        }
    }
    Ok(analytic)
}

// ---- Helper methods ----

fn constants_like(template: &ArrayD<f64>, values: &[f64]) -> ArrayD<Dual> {
    let mut out = template.mapv(Dual::constant);
    for (e, &v) in out.iter_mut().zip(values) {
        *e = Dual::constant(v);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{IxDyn, array};

    #[test]
    // Purpose
    // -------
    // Verify the forward-mode gradient of a quadratic form.
    //
    // Given
    // -----
    // - `L(x) = Σ xᵢ²` at `x = [1, -2, 3]`.
    //
    // Expect
    // ------
    // - `∇L = 2x`.
    fn gradient_of_sum_of_squares_is_twice_input() {
        // Arrange
        let x = array![1.0_f64, -2.0, 3.0].into_dyn();

        // Act
        let g = gradient(&x, |v| v.iter().fold(Dual::constant(0.0), |acc, &e| acc + e * e))
            .expect("non-empty input");

        // Assert
        assert_eq!(g.shape(), &[3]);
        for (gi, xi) in g.iter().zip(x.iter()) {
            assert_abs_diff_eq!(*gi, 2.0 * xi, epsilon = 1e-14);
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm that `check_gradient` accepts a correct gradient and keeps the
    // input shape for multi-axis inputs.
    //
    // Given
    // -----
    // - `L(x) = Σ xᵢ / (1 + xᵢ²)` on a 2 × 2 input.
    //
    // Expect
    // ------
    // - `Ok(g)` with shape `[2, 2]`.
    fn check_gradient_accepts_smooth_loss() {
        let x = array![[0.1_f64, -0.4], [0.7, 1.3]].into_dyn();
        let loss = |v: &ArrayD<Dual>| {
            v.iter().fold(Dual::constant(0.0), |acc, &e| acc + e / (Dual::constant(1.0) + e * e))
        };

        let g = check_gradient(&x, loss, 1e-5).expect("gradients agree");

        assert_eq!(g.shape(), &[2, 2]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure invalid tolerances and empty inputs are rejected up front.
    //
    // Given
    // -----
    // - A zero tolerance; an empty input array.
    //
    // Expect
    // ------
    // - `InvalidTolerance` and `EmptyInput` respectively.
    fn check_gradient_rejects_bad_configuration() {
        let x = array![1.0_f64].into_dyn();
        let loss = |v: &ArrayD<Dual>| v.sum();

        match check_gradient(&x, loss, 0.0) {
            Err(GradientError::InvalidTolerance { .. }) => {}
            other => panic!("expected InvalidTolerance, got {other:?}"),
        }

        let empty = ArrayD::<f64>::zeros(IxDyn(&[0]));
        assert_eq!(gradient(&empty, loss), Err(GradientError::EmptyInput));
    }
}
