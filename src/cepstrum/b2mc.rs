//! MLSA filter coefficients → mel-cepstrum, the inverse of
//! [`crate::cepstrum::mc2b`].
//!
//! `mc_M = b_M`, `mc_m = b_m + alpha · b_{m+1}`. Each output depends on at
//! most two inputs so no matrix form is kept.

use ndarray::ArrayD;

use crate::{
    cepstrum::{
        errors::CepstrumResult,
        validation::{validate_alpha, validate_coefficient_axis},
    },
    numerics::scalar::Scalar,
    utils::map_lanes,
};

/// b2mc — per-lane inverse of [`crate::cepstrum::mc2b::mc2b_recursive`].
pub fn b2mc<T: Scalar>(b: &ArrayD<T>, alpha: T) -> ArrayD<T> {
    map_lanes(b, |lane| {
        let order = lane.len() - 1;
        (0..=order)
            .map(|m| if m < order { lane[m] + alpha * lane[m + 1] } else { lane[m] })
            .collect()
    })
}

/// MlsaToMelCepstrum — order-bound inverse transform with a fixed alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MlsaToMelCepstrum {
    order: usize,
    alpha: f64,
}

impl MlsaToMelCepstrum {
    /// Errors
    /// ------
    /// - `CepstrumError::InvalidAlpha` when `alpha` is not finite or
    ///   `|alpha| >= 1`.
    pub fn new(order: usize, alpha: f64) -> CepstrumResult<Self> {
        validate_alpha(alpha)?;
        Ok(Self { order, alpha })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// forward — convert MLSA coefficients of shape `(..., M+1)` back to
    /// mel-cepstrum.
    pub fn forward<T: Scalar>(&self, b: &ArrayD<T>) -> CepstrumResult<ArrayD<T>> {
        validate_coefficient_axis(b, self.order, "MLSA coefficients")?;
        Ok(b2mc(b, T::from_f64(self.alpha)))
    }
}
