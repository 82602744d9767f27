//! Mel-cepstrum → MLSA digital filter coefficients.
//!
//! Purpose
//! -------
//! Convert mel-cepstral coefficients `mc` of shape `(..., M+1)` into the
//! coefficients `b` of the MLSA (mel log spectrum approximation) filter for
//! a frequency warping factor `alpha`.
//!
//! Key behaviors
//! -------------
//! - Recursive path ([`mc2b_recursive`]): `b_M = mc_M`,
//!   `b_m = mc_m - alpha · b_{m+1}` for `m = M-1, …, 0`. Works for any
//!   `alpha: T`, including dual numbers, so warping can be differentiated.
//! - Matrix path ([`mc2b_matrix`]): `b = mc · A` with the fixed
//!   lower-triangular `A[j][m] = (-alpha)^(j-m)` for `j >= m`
//!   ([`mlsa_transform_matrix`]), built once per `(order, alpha)`.
//! - [`MelCepstrumToMlsa`] selects the path at construction: binding `alpha`
//!   in the builder precomputes `A`; leaving it unbound makes `alpha` a
//!   per-call argument evaluated with the recursion.
//!
//! Invariants & assumptions
//! ------------------------
//! - `|alpha| < 1` and finite, validated by the builder and per call.
//! - Both paths agree to rounding; the matrix is never mutated after
//!   construction and is safe to share across threads.

use std::marker::PhantomData;

use ndarray::{Array2, ArrayD, ArrayView1};

use crate::{
    cepstrum::{
        errors::{CepstrumError, CepstrumResult},
        validation::{validate_alpha, validate_coefficient_axis},
    },
    numerics::scalar::Scalar,
    utils::map_lanes,
};

/// mlsa_transform_matrix — `(M+1) × (M+1)` matrix with `b = mc · A`.
///
/// `A[j][m] = (-alpha)^(j-m)` for `j >= m`, zero above the diagonal. Powers
/// are accumulated by repeated multiplication.
pub fn mlsa_transform_matrix<T: Scalar>(order: usize, alpha: f64) -> Array2<T> {
    let n = order + 1;
    let mut powers = Vec::with_capacity(n);
    let mut p = 1.0_f64;
    for _ in 0..n {
        powers.push(p);
        p *= -alpha;
    }
    Array2::from_shape_fn(
        (n, n),
        |(j, m)| if j >= m { T::from_f64(powers[j - m]) } else { T::zero() },
    )
}

/// mc2b_recursive — backward order recursion, per lane.
pub fn mc2b_recursive<T: Scalar>(mc: &ArrayD<T>, alpha: T) -> ArrayD<T> {
    map_lanes(mc, |lane| mc2b_lane(lane, alpha))
}

/// mc2b_matrix — apply a precomputed [`mlsa_transform_matrix`], per lane.
///
/// Panics
/// ------
/// - Panics if `matrix` is not `(M+1) × (M+1)` for the trailing length of `mc`.
pub fn mc2b_matrix<T: Scalar>(mc: &ArrayD<T>, matrix: &Array2<T>) -> ArrayD<T> {
    map_lanes(mc, |lane| {
        (0..matrix.ncols())
            .map(|m| lane.iter().zip(matrix.column(m)).fold(T::zero(), |acc, (&x, &w)| acc + x * w))
            .collect()
    })
}

fn mc2b_lane<T: Scalar>(mc: ArrayView1<'_, T>, alpha: T) -> Vec<T> {
    let order = mc.len() - 1;
    let mut reversed: Vec<T> = Vec::with_capacity(order + 1);
    let mut next = mc[order];
    reversed.push(next);
    for m in (0..order).rev() {
        next = mc[m] - alpha * next;
        reversed.push(next);
    }
    reversed.reverse();
    reversed
}

/// Warping — how [`MelCepstrumToMlsa`] obtains its warping factor.
#[derive(Debug, Clone, PartialEq)]
pub enum Warping<T> {
    /// Alpha bound at construction; `matrix` is its transform matrix.
    Fixed { alpha: f64, matrix: Array2<T> },
    /// Alpha supplied on every call.
    Dynamic,
}

/// MelCepstrumToMlsa — order-bound mel-cepstrum → MLSA coefficient transform.
///
/// Built through [`MelCepstrumToMlsa::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct MelCepstrumToMlsa<T: Scalar = f64> {
    order: usize,
    warping: Warping<T>,
}

/// MelCepstrumToMlsaBuilder — construction-time configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MelCepstrumToMlsaBuilder<T: Scalar = f64> {
    order: usize,
    alpha: Option<f64>,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> MelCepstrumToMlsaBuilder<T> {
    /// Bind a static warping factor; enables the matrix path.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Leave the warping factor to be supplied per call.
    pub fn dynamic(mut self) -> Self {
        self.alpha = None;
        self
    }

    /// Errors
    /// ------
    /// - `CepstrumError::InvalidAlpha` when a bound alpha is not finite or
    ///   `|alpha| >= 1`.
    pub fn build(self) -> CepstrumResult<MelCepstrumToMlsa<T>> {
        let warping = match self.alpha {
            Some(alpha) => {
                validate_alpha(alpha)?;
                tracing::debug!(order = self.order, alpha, "precomputing MLSA transform matrix");
                Warping::Fixed { alpha, matrix: mlsa_transform_matrix(self.order, alpha) }
            }
            None => Warping::Dynamic,
        };
        Ok(MelCepstrumToMlsa { order: self.order, warping })
    }
}

impl<T: Scalar> MelCepstrumToMlsa<T> {
    /// Start a builder for cepstral order `M`; dynamic warping by default.
    pub fn builder(order: usize) -> MelCepstrumToMlsaBuilder<T> {
        MelCepstrumToMlsaBuilder { order, alpha: None, _scalar: PhantomData }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn warping(&self) -> &Warping<T> {
        &self.warping
    }

    /// forward — convert `mc` to MLSA filter coefficients.
    ///
    /// Parameters
    /// ----------
    /// - `mc`: `&ArrayD<T>`
    ///   Mel-cepstrum, shape `(..., M+1)`.
    /// - `alpha`: `Option<T>`
    ///   Per-call warping factor. When given, the recursion is used with this
    ///   value (also on a fixed instance). When `None`, the bound matrix is
    ///   used.
    ///
    /// Errors
    /// ------
    /// - `CepstrumError::MissingCoefficientAxis` / `DimensionMismatch` for a
    ///   trailing axis other than `M+1`.
    /// - `CepstrumError::InvalidAlpha` for a per-call alpha outside (-1, 1).
    /// - `CepstrumError::MissingAlpha` for a dynamic instance called with
    ///   `None`.
    pub fn forward(&self, mc: &ArrayD<T>, alpha: Option<T>) -> CepstrumResult<ArrayD<T>> {
        validate_coefficient_axis(mc, self.order, "cepstrum")?;
        match (alpha, &self.warping) {
            (Some(alpha), _) => {
                validate_alpha(alpha.to_f64())?;
                Ok(mc2b_recursive(mc, alpha))
            }
            (None, Warping::Fixed { matrix, .. }) => Ok(mc2b_matrix(mc, matrix)),
            (None, Warping::Dynamic) => Err(CepstrumError::MissingAlpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Pin the recursion on a ramp input with hand-computed output.
    //
    // Given
    // -----
    // - `mc = [0, 1, 2, 3, 4]`, `alpha = 0.3`.
    //
    // Expect
    // ------
    // - `b = [-0.1686, 0.562, 1.46, 1.8, 4]`.
    fn ramp_matches_hand_computation() {
        // Arrange
        let mc = array![0.0_f64, 1.0, 2.0, 3.0, 4.0].into_dyn();

        // Act
        let b = mc2b_recursive(&mc, 0.3);

        // Assert
        let expected = [-0.1686, 0.562, 1.46, 1.8, 4.0];
        for (got, want) in b.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the transform matrix layout for a small order.
    //
    // Given
    // -----
    // - `order = 2`, `alpha = 0.5`.
    //
    // Expect
    // ------
    // - `A = [[1, 0, 0], [-0.5, 1, 0], [0.25, -0.5, 1]]`.
    fn transform_matrix_is_lower_triangular_powers() {
        let a = mlsa_transform_matrix::<f64>(2, 0.5);
        assert_eq!(a, array![[1.0, 0.0, 0.0], [-0.5, 1.0, 0.0], [0.25, -0.5, 1.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Verify path selection and its error cases.
    //
    // Given
    // -----
    // - A fixed instance (`alpha = 0.42`) and a dynamic instance, order 3.
    //
    // Expect
    // ------
    // - Fixed + `None` equals dynamic + `Some(0.42)`.
    // - Dynamic + `None` is `MissingAlpha`; `Some(1.2)` is `InvalidAlpha`.
    // - Building with `alpha = -1.0` fails.
    fn builder_selects_path_and_validates() {
        let fixed = MelCepstrumToMlsa::<f64>::builder(3).alpha(0.42).build().expect("valid");
        let dynamic = MelCepstrumToMlsa::<f64>::builder(3).build().expect("valid");
        let mc = array![[0.3_f64, -1.0, 0.7, 0.2], [1.0, 0.0, 0.0, 2.0]].into_dyn();

        let via_matrix = fixed.forward(&mc, None).expect("fixed path");
        let via_loop = dynamic.forward(&mc, Some(0.42)).expect("dynamic path");
        for (x, y) in via_matrix.iter().zip(via_loop.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }

        assert_eq!(dynamic.forward(&mc, None), Err(CepstrumError::MissingAlpha));
        assert!(matches!(
            dynamic.forward(&mc, Some(1.2)),
            Err(CepstrumError::InvalidAlpha { .. })
        ));
        assert!(matches!(
            MelCepstrumToMlsa::<f64>::builder(3).alpha(-1.0).build(),
            Err(CepstrumError::InvalidAlpha { .. })
        ));
        assert!(matches!(fixed.warping(), Warping::Fixed { .. }));
        assert_eq!(dynamic.warping(), &Warping::Dynamic);
    }
}
