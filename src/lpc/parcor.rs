//! Reflection-coefficient (parcor) transforms.
//!
//! Purpose
//! -------
//! Convert between LPC coefficients `[G, a_1..a_M]` and parcor coefficients
//! `[G, k_1..k_M]` of the same order. The gain passes through untouched.
//!
//! Key behaviors
//! -------------
//! - [`lpc_to_parcor`] runs the step-down recursion from order `M` to 1:
//!   `k_m = a^{(m)}_m`, `a^{(m-1)}_i = (a^{(m)}_i + k_m a^{(m)}_{m-i}) / (1 - k_m²)`.
//! - [`parcor_to_lpc`] runs the step-up recursion from order 1 to `M`:
//!   `a^{(m)}_m = k_m`, `a^{(m)}_i = a^{(m-1)}_i - k_m a^{(m-1)}_{m-i}`.
//! - [`LpcToParcor`] and [`ParcorToLpc`] bind an order and validate the
//!   trailing dimension before delegating to the free functions.
//!
//! Invariants & assumptions
//! ------------------------
//! - Predictor convention `H(z) = G / (1 - Σ a_i z⁻ⁱ)`; with it the order-`m`
//!   reflection coefficient equals the last order-`m` predictor coefficient.
//! - The step-up recursion is total. The step-down recursion divides by
//!   `1 - k_m²` for `m >= 2`, so `|k_m| = 1` there yields `inf`/`nan`.
//!   [`crate::lpc::StabilityCheck`] decomposes with a guarded step-down
//!   that keeps such lanes finite.
//!
//! Testing notes
//! -------------
//! - Unit tests pin a hand-computed order-2 pair and the order-0 identity;
//!   integration tests cover batched round trips and the stability check
//!   that consumes both directions.

use ndarray::{ArrayD, ArrayView1};

use crate::{
    lpc::{errors::LpcResult, validation::validate_coefficient_axis},
    numerics::scalar::Scalar,
    utils::map_lanes,
};

/// lpc_to_parcor — LPC coefficients to parcor coefficients, per lane.
///
/// Input and output have shape `(..., M+1)`; `M` is taken from the trailing
/// axis. Callers must pass an array with at least one axis.
pub fn lpc_to_parcor<T: Scalar>(a: &ArrayD<T>) -> ArrayD<T> {
    map_lanes(a, lpc_to_parcor_lane)
}

/// parcor_to_lpc — parcor coefficients to LPC coefficients, per lane.
pub fn parcor_to_lpc<T: Scalar>(k: &ArrayD<T>) -> ArrayD<T> {
    map_lanes(k, parcor_to_lpc_lane)
}

pub(crate) fn lpc_to_parcor_lane<T: Scalar>(a: ArrayView1<'_, T>) -> Vec<T> {
    step_down_lane(a, None)
}

/// Step-down recursion with an optional guard for singular steps.
///
/// With `guard = Some(b)`, a step whose `1 - k_m²` is exactly zero divides
/// by `1 - b²` instead, using `k_m` clipped into `[-b, b]` for the lower
/// orders. The reported `k_m` is left unchanged.
pub(crate) fn step_down_lane<T: Scalar>(a: ArrayView1<'_, T>, guard: Option<T>) -> Vec<T> {
    if a.is_empty() {
        return Vec::new();
    }
    let order = a.len() - 1;
    let mut parcor = vec![T::zero(); order + 1];
    parcor[0] = a[0];

    let mut coeffs: Vec<T> = a.iter().skip(1).copied().collect();
    for m in (1..=order).rev() {
        let km = coeffs[m - 1];
        parcor[m] = km;
        let mut kd = km;
        let mut z = T::one() - km * km;
        if let Some(b) = guard {
            if z.to_f64() == 0.0 {
                kd = km.clip(-b, b);
                z = T::one() - kd * kd;
            }
        }
        coeffs = (1..m).map(|i| (coeffs[i - 1] + kd * coeffs[m - i - 1]) / z).collect();
    }
    parcor
}

pub(crate) fn parcor_to_lpc_lane<T: Scalar>(k: ArrayView1<'_, T>) -> Vec<T> {
    if k.is_empty() {
        return Vec::new();
    }
    let order = k.len() - 1;
    let mut coeffs: Vec<T> = Vec::with_capacity(order);
    for m in 1..=order {
        let km = k[m];
        let mut next: Vec<T> = (1..m).map(|i| coeffs[i - 1] - km * coeffs[m - i - 1]).collect();
        next.push(km);
        coeffs = next;
    }

    let mut lpc = Vec::with_capacity(order + 1);
    lpc.push(k[0]);
    lpc.extend(coeffs);
    lpc
}

/// LpcToParcor — order-bound LPC → parcor conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LpcToParcor {
    order: usize,
}

impl LpcToParcor {
    pub fn new(order: usize) -> Self {
        LpcToParcor { order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Convert `a` of shape `(..., M+1)` to parcor coefficients.
    ///
    /// Errors
    /// ------
    /// - `LpcError::MissingCoefficientAxis` / `LpcError::DimensionMismatch`
    ///   when the trailing axis is absent or not `M+1` long.
    pub fn forward<T: Scalar>(&self, a: &ArrayD<T>) -> LpcResult<ArrayD<T>> {
        validate_coefficient_axis(a, self.order, "LPC coefficients")?;
        Ok(lpc_to_parcor(a))
    }
}

/// ParcorToLpc — order-bound parcor → LPC conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcorToLpc {
    order: usize,
}

impl ParcorToLpc {
    pub fn new(order: usize) -> Self {
        ParcorToLpc { order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Convert `k` of shape `(..., M+1)` to LPC coefficients.
    ///
    /// Errors
    /// ------
    /// - `LpcError::MissingCoefficientAxis` / `LpcError::DimensionMismatch`
    ///   when the trailing axis is absent or not `M+1` long.
    pub fn forward<T: Scalar>(&self, k: &ArrayD<T>) -> LpcResult<ArrayD<T>> {
        validate_coefficient_axis(k, self.order, "parcor coefficients")?;
        Ok(parcor_to_lpc(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lpc::errors::LpcError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Pin the step-up recursion on a hand-computed order-2 example and check
    // that step-down recovers the parcor vector.
    //
    // Given
    // -----
    // - `k = [1, 0.5, -0.3]`.
    //
    // Expect
    // ------
    // - `a = [1, 0.5 + 0.3·0.5, -0.3] = [1, 0.65, -0.3]`.
    // - `lpc_to_parcor(a) = k`.
    fn order_two_step_up_and_step_down_agree_with_hand_computation() {
        // Arrange
        let k = array![1.0_f64, 0.5, -0.3].into_dyn();

        // Act
        let a = parcor_to_lpc(&k);
        let k_back = lpc_to_parcor(&a);

        // Assert
        let expected = [1.0, 0.65, -0.3];
        for (got, want) in a.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = TOL);
        }
        for (got, want) in k_back.iter().zip(k.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm that order 0 is the identity in both directions.
    //
    // Given
    // -----
    // - A batch of gains `[[2.0], [0.5]]`.
    //
    // Expect
    // ------
    // - Both transforms return their input unchanged.
    fn order_zero_is_identity() {
        let g = array![[2.0_f64], [0.5]].into_dyn();
        assert_eq!(lpc_to_parcor(&g), g);
        assert_eq!(parcor_to_lpc(&g), g);
    }

    #[test]
    // Purpose
    // -------
    // Check that the order-bound components reject mismatched dimensions
    // and otherwise match the free functions.
    //
    // Given
    // -----
    // - `LpcToParcor::new(2)` applied to length-3 and length-4 lanes.
    //
    // Expect
    // ------
    // - Length 4 yields `DimensionMismatch`; length 3 matches `lpc_to_parcor`.
    fn components_validate_trailing_dimension() {
        let to_parcor = LpcToParcor::new(2);
        let to_lpc = ParcorToLpc::new(2);
        let good = array![[1.0_f64, 0.2, 0.1], [3.0, -0.4, 0.05]].into_dyn();
        let bad = array![1.0_f64, 0.2, 0.1, 0.0].into_dyn();

        assert_eq!(to_parcor.forward(&good), Ok(lpc_to_parcor(&good)));
        assert_eq!(to_lpc.forward(&good), Ok(parcor_to_lpc(&good)));
        assert_eq!(
            to_parcor.forward(&bad),
            Err(LpcError::DimensionMismatch { what: "LPC coefficients", expected: 3, found: 4 })
        );
    }

    #[test]
    // Purpose
    // -------
    // The guarded step-down keeps a unit top-order reflection coefficient
    // finite while reporting it unchanged.
    //
    // Given
    // -----
    // - `a = parcor_to_lpc([1, 0.3, 1]) = [1, 0, 1]`; guard `0.999`.
    //
    // Expect
    // ------
    // - Unguarded: non-finite `k_1`.
    // - Guarded: `[1, 0, 1]`, all finite.
    fn guarded_step_down_survives_unit_reflection_coefficient() {
        let a = parcor_to_lpc(&array![1.0_f64, 0.3, 1.0].into_dyn());

        let plain = lpc_to_parcor(&a);
        let guarded = step_down_lane(a.view().into_dimensionality().expect("1-D"), Some(0.999));

        assert!(!plain[[1]].is_finite());
        assert_eq!(guarded, vec![1.0, 0.0, 1.0]);
    }
}
