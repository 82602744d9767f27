//! cepstrum — mel-cepstrum ↔ MLSA filter coefficient transforms.
//!
//! Purpose
//! -------
//! Map mel-cepstral coefficients to the coefficients consumed by an MLSA
//! synthesis filter and back, for a frequency warping factor `alpha`.
//!
//! Key behaviors
//! -------------
//! - [`MelCepstrumToMlsa`]: forward transform with a construction-time
//!   choice between a precomputed matrix (fixed `alpha`) and the backward
//!   recursion (per-call `alpha`, differentiable in `alpha`).
//! - [`MlsaToMelCepstrum`] / [`b2mc`]: the inverse recursion.
//!
//! Invariants & assumptions
//! ------------------------
//! - `|alpha| < 1`, validated wherever `alpha` enters through an order-bound
//!   component.
//! - Coefficients sit on the trailing axis with length `M + 1`; leading axes
//!   are independent batch lanes.

pub mod b2mc;
pub mod errors;
pub mod mc2b;
pub mod validation;

pub use self::b2mc::{MlsaToMelCepstrum, b2mc};
pub use self::errors::{CepstrumError, CepstrumResult};
pub use self::mc2b::{
    MelCepstrumToMlsa, MelCepstrumToMlsaBuilder, Warping, mc2b_matrix, mc2b_recursive,
    mlsa_transform_matrix,
};

pub mod prelude {
    pub use super::b2mc::MlsaToMelCepstrum;
    pub use super::errors::{CepstrumError, CepstrumResult};
    pub use super::mc2b::MelCepstrumToMlsa;
}
