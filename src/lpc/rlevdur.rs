//! Reverse Levinson-Durbin recursion: gain and LPC coefficients → autocorrelation.
//!
//! Purpose
//! -------
//! Recover the autocorrelation `r` of shape `(..., M+1)` that a given set of
//! LPC coefficients `[K, a_1..a_M]` solves, so that
//! `levinson_durbin(reverse_levinson_durbin(a)) == a` and
//! `reverse_levinson_durbin(levinson_durbin(r)) == r` up to rounding.
//!
//! Key behaviors
//! -------------
//! - The gain is `K = sqrt(E_M)`; the ladder starts from `E_M = K²`.
//! - Build an order ladder from the reversed inverse-filter polynomial
//!   `[1, -a_1, .., -a_M]`: at each step the leading entry `u0` is the
//!   current reflection coefficient and the remaining row is reduced by one
//!   order with `u' = (u1 - u0 · reverse(u1)) / (1 - u0²)`, while the
//!   prediction error grows as `E' = E / (1 - u0²)`.
//! - Stack the ladder rows (lowest order first) as the columns of a
//!   unit-upper-triangular matrix `U`, solve `U V = I`, and combine
//!   `r_j = Σ_i V[i,0] E_i V[i,j]`.
//! - [`ReverseLevinsonDurbin::new`] keeps the identity as an immutable
//!   buffer reused by every call; [`ReverseLevinsonDurbin::stateless`] builds
//!   it per call.
//!
//! Invariants & assumptions
//! ------------------------
//! - The gain must be strictly positive (checked by the component).
//! - `1 - u0²` must stay away from zero; unstable or marginal coefficients
//!   are not detected and produce `inf`/`nan`. Route possibly unstable input
//!   through [`crate::lpc::stability::StabilityCheck`] first.

use ndarray::{Array2, ArrayD, ArrayView1};

use crate::{
    lpc::{
        errors::LpcResult,
        validation::{validate_coefficient_axis, validate_gain},
    },
    numerics::{scalar::Scalar, triangular::{eye, solve_unit_upper_triangular}},
    utils::map_lanes,
};

/// reverse_levinson_durbin — batched reverse recursion.
///
/// Parameters
/// ----------
/// - `a`: `&ArrayD<T>`
///   Gain and LPC coefficients, shape `(..., M+1)`; at least one axis.
/// - `identity`: `Option<&Array2<T>>`
///   Precomputed `(M+1) × (M+1)` identity; built on the fly when `None`.
///
/// Returns
/// -------
/// `ArrayD<T>`
///   Autocorrelation `[r_0..r_M]` per lane, same shape as `a`.
///
/// Panics
/// ------
/// - Panics if `identity` is provided with a size other than `M+1`.
pub fn reverse_levinson_durbin<T: Scalar>(
    a: &ArrayD<T>, identity: Option<&Array2<T>>,
) -> ArrayD<T> {
    let n = a.shape().last().copied().unwrap_or(0);
    match identity {
        Some(id) => map_lanes(a, |lane| reverse_levinson_durbin_lane(lane, id)),
        None => {
            let id = eye::<T>(n);
            map_lanes(a, |lane| reverse_levinson_durbin_lane(lane, &id))
        }
    }
}

pub(crate) fn reverse_levinson_durbin_lane<T: Scalar>(
    a: ArrayView1<'_, T>, identity: &Array2<T>,
) -> Vec<T> {
    let order = a.len() - 1;
    let n = order + 1;

    // Ladder built from the full order down to order 0.
    let mut rows: Vec<Vec<T>> = Vec::with_capacity(n);
    let mut energies: Vec<T> = Vec::with_capacity(n);
    rows.push((0..n).map(|j| if j == order { T::one() } else { -a[order - j] }).collect());
    energies.push(a[0] * a[0]);

    for m in 0..order {
        let prev = &rows[m];
        let u0 = prev[0];
        let u1 = &prev[1..order - m];
        let len = u1.len();
        let t = T::one() / (T::one() - u0 * u0);
        let mut u: Vec<T> = (0..len).map(|j| (u1[j] - u0 * u1[len - 1 - j]) * t).collect();
        u.resize(n, T::zero());
        let e = energies[m] * t;
        rows.push(u);
        energies.push(e);
    }

    // Column j holds the order-j row.
    let upper = Array2::from_shape_fn((n, n), |(i, j)| rows[order - j][i]);
    let v = solve_unit_upper_triangular(upper.view(), identity.view());

    (0..n)
        .map(|j| (0..n).fold(T::zero(), |acc, i| acc + v[[i, 0]] * energies[order - i] * v[[i, j]]))
        .collect()
}

/// ReverseLevinsonDurbin — order-bound reverse recursion.
///
/// Holds the identity used by the triangular solve when built with
/// [`ReverseLevinsonDurbin::new`]; the buffer is never mutated after
/// construction and can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseLevinsonDurbin<T: Scalar = f64> {
    order: usize,
    identity: Option<Array2<T>>,
}

impl<T: Scalar> ReverseLevinsonDurbin<T> {
    /// Build with a precomputed `(M+1) × (M+1)` identity buffer.
    pub fn new(order: usize) -> Self {
        tracing::debug!(order, "precomputing reverse Levinson-Durbin identity buffer");
        ReverseLevinsonDurbin { order, identity: Some(eye(order + 1)) }
    }

    /// Build without buffers; the identity is created on every call.
    pub fn stateless(order: usize) -> Self {
        ReverseLevinsonDurbin { order, identity: None }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Recover the autocorrelation from `[K, a_1..a_M]`.
    ///
    /// Errors
    /// ------
    /// - `LpcError::MissingCoefficientAxis` / `LpcError::DimensionMismatch`
    ///   when `a` does not end in an axis of length `M+1`.
    /// - `LpcError::NonPositiveGain` when any lane has `a[..., 0] <= 0`.
    pub fn forward(&self, a: &ArrayD<T>) -> LpcResult<ArrayD<T>> {
        validate_coefficient_axis(a, self.order, "LPC coefficients")?;
        validate_gain(a)?;
        Ok(reverse_levinson_durbin(a, self.identity.as_ref()))
    }
}
