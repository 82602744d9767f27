//! Levinson-Durbin recursion: autocorrelation → gain and LPC coefficients.
//!
//! Purpose
//! -------
//! Solve the Yule-Walker system for every lane of a batched autocorrelation
//! array `r` of shape `(..., M+1)`, returning `[K, a_1..a_M]` and, on
//! request, the reflection coefficients `[K, k_1..k_M]` produced along the
//! way. The gain is `K = sqrt(E_M)`, the root of the final prediction-error
//! energy.
//!
//! Key behaviors
//! -------------
//! - Order-recursive update, unrolled over the static order `M`:
//!   `k_m = (r_m - Σ_{i<m} a_i r_{m-i}) / E`, `a'_i = a_i - k_m a_{m-i}`,
//!   `a'_m = k_m`, `E' = E (1 - k_m²)`, starting from `E = r_0`.
//! - Each order builds a fresh coefficient vector; nothing from a previous
//!   order is overwritten, so dual-number tangents flow through every step.
//!
//! Invariants & assumptions
//! ------------------------
//! - Valid (positive-definite) autocorrelation gives `E_M > 0`, `K > 0` and
//!   `|k_m| < 1` for every order.
//! - `r_0 == 0`, or any sequence that drives `E` to zero or below, is the
//!   caller's responsibility: the output then contains `inf`/`nan` and no
//!   error is raised.

use ndarray::{ArrayD, ArrayView1};

use crate::{
    lpc::{errors::LpcResult, validation::validate_coefficient_axis},
    numerics::scalar::Scalar,
    utils::{map_lanes, map_lanes_pair},
};

/// levinson_durbin — batched Levinson-Durbin solve.
///
/// Parameters
/// ----------
/// - `r`: `&ArrayD<T>`
///   Autocorrelation of shape `(..., M+1)`; at least one axis.
///
/// Returns
/// -------
/// `ArrayD<T>`
///   `[K, a_1..a_M]` per lane with `K = sqrt(E_M)`, same shape as `r`.
pub fn levinson_durbin<T: Scalar>(r: &ArrayD<T>) -> ArrayD<T> {
    map_lanes(r, |lane| levinson_durbin_lane(lane).0)
}

/// levinson_durbin_with_parcor — batched solve also exposing parcor.
///
/// Returns
/// -------
/// `(ArrayD<T>, ArrayD<T>)`
///   LPC coefficients `[K, a_1..a_M]` and parcor coefficients
///   `[K, k_1..k_M]`, both shaped like `r`.
pub fn levinson_durbin_with_parcor<T: Scalar>(r: &ArrayD<T>) -> (ArrayD<T>, ArrayD<T>) {
    map_lanes_pair(r, levinson_durbin_lane)
}

pub(crate) fn levinson_durbin_lane<T: Scalar>(r: ArrayView1<'_, T>) -> (Vec<T>, Vec<T>) {
    let order = r.len() - 1;
    let mut energy = r[0];
    let mut coeffs: Vec<T> = Vec::with_capacity(order);
    let mut parcor: Vec<T> = Vec::with_capacity(order);

    for m in 1..=order {
        let acc = (1..m).fold(r[m], |acc, i| acc - coeffs[i - 1] * r[m - i]);
        let km = acc / energy;
        let mut next: Vec<T> = (1..m).map(|i| coeffs[i - 1] - km * coeffs[m - i - 1]).collect();
        next.push(km);
        coeffs = next;
        energy = energy * (T::one() - km * km);
        parcor.push(km);
    }

    let gain = energy.sqrt();
    let mut lpc = Vec::with_capacity(order + 1);
    lpc.push(gain);
    lpc.extend(coeffs);
    let mut k = Vec::with_capacity(order + 1);
    k.push(gain);
    k.extend(parcor);
    (lpc, k)
}

/// LevinsonDurbin — order-bound Levinson-Durbin component.
///
/// Construction only fixes the order `M`; no buffers are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevinsonDurbin {
    order: usize,
}

impl LevinsonDurbin {
    pub fn new(order: usize) -> Self {
        LevinsonDurbin { order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Solve for `[K, a_1..a_M]`.
    ///
    /// Errors
    /// ------
    /// - `LpcError::MissingCoefficientAxis` / `LpcError::DimensionMismatch`
    ///   when `r` does not end in an axis of length `M+1`.
    pub fn forward<T: Scalar>(&self, r: &ArrayD<T>) -> LpcResult<ArrayD<T>> {
        validate_coefficient_axis(r, self.order, "autocorrelation")?;
        Ok(levinson_durbin(r))
    }

    /// Solve for LPC and parcor coefficients together.
    ///
    /// Errors
    /// ------
    /// - Same as [`LevinsonDurbin::forward`].
    pub fn forward_with_parcor<T: Scalar>(
        &self, r: &ArrayD<T>,
    ) -> LpcResult<(ArrayD<T>, ArrayD<T>)> {
        validate_coefficient_axis(r, self.order, "autocorrelation")?;
        Ok(levinson_durbin_with_parcor(r))
    }
}
