//! rust_lpc — differentiable linear-prediction and parcor algebra.
//!
//! Purpose
//! -------
//! Serve as the crate root for the family of batched coefficient transforms
//! used by speech analysis and synthesis pipelines: autocorrelation ↔ LPC
//! (Levinson-Durbin and its inverse), LPC ↔ parcor (step-down / step-up),
//! a stability-enforcing projection, and mel-cepstrum ↔ MLSA filter
//! coefficients.
//!
//! Key behaviors
//! -------------
//! - Re-export the order-bound components ([`lpc::LevinsonDurbin`],
//!   [`lpc::ReverseLevinsonDurbin`], [`lpc::StabilityCheck`],
//!   [`cepstrum::MelCepstrumToMlsa`], …) as the public crate surface.
//! - Write every recursion once over [`numerics::Scalar`], so the same code
//!   runs on `f32`, `f64`, and [`autodiff::Dual`] for exact gradients.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are `ndarray::ArrayD<T>` with a trailing coefficient axis of
//!   length `M + 1`; all leading axes are independent batch lanes.
//! - Outputs are freshly allocated with the input's shape; no transform
//!   mutates its input or keeps per-call state.
//! - Precomputed buffers (identity for the reverse recursion, the MLSA
//!   transform matrix) are built at construction and read-only afterwards,
//!   so components are `Send + Sync`.
//!
//! Conventions
//! -----------
//! - Predictor convention `H(z) = K / (1 - Σ a_i z⁻ⁱ)` with gain
//!   `a[0] = K = sqrt(E_M)`; see [`lpc`] for details.
//! - Precondition failures are typed errors per domain ([`lpc::LpcError`],
//!   [`cepstrum::CepstrumError`], [`autodiff::GradientError`]);
//!   numerically ill-conditioned inputs propagate `inf`/`nan` instead.
//! - Diagnostics use `tracing`; the crate installs no subscriber.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; cross-module properties (round
//!   trips, stability, gradients) live in `tests/`.

pub mod autodiff;
pub mod cepstrum;
pub mod lpc;
pub mod numerics;
pub mod utils;

pub use crate::autodiff::{Dual, check_gradient, gradient};
pub use crate::cepstrum::{CepstrumError, CepstrumResult, MelCepstrumToMlsa, MlsaToMelCepstrum};
pub use crate::lpc::{
    LevinsonDurbin, LpcError, LpcResult, LpcToParcor, ParcorToLpc, ReverseLevinsonDurbin,
    StabilityCheck, StabilityOptions, StabilityReport, WarnType,
};
pub use crate::numerics::Scalar;
