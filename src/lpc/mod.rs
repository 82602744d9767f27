//! lpc — linear-prediction / parcor algebra over batched coefficient arrays.
//!
//! Purpose
//! -------
//! Provide the mutually consistent family of transforms between
//! autocorrelation, LPC coefficients, and reflection (parcor) coefficients,
//! plus a stability-enforcing projection. Every transform is a pure function
//! of an `ArrayD` whose trailing axis holds coefficients and whose leading
//! axes are independent batch lanes.
//!
//! Key behaviors
//! -------------
//! - [`LevinsonDurbin`] / [`levinson_durbin`]: autocorrelation → `[K, a]`,
//!   optionally exposing parcor coefficients.
//! - [`ReverseLevinsonDurbin`] / [`reverse_levinson_durbin`]: `[K, a]` →
//!   autocorrelation via an order-reduction ladder and a unit-triangular
//!   solve.
//! - [`LpcToParcor`] / [`ParcorToLpc`]: step-down and step-up recursions.
//! - [`StabilityCheck`]: clip reflection coefficients into
//!   `[-(1 - margin), 1 - margin]` with an `ignore` / `warn` / `fail` policy.
//!
//! Invariants & assumptions
//! ------------------------
//! - Predictor convention `H(z) = K / (1 - Σ a_i z⁻ⁱ)`; `a[0]` is the gain
//!   `K = sqrt(E_M)`, the root of the final prediction-error energy, and
//!   equals `k[0]`.
//! - Round trips `levinson_durbin ∘ reverse_levinson_durbin` and
//!   `reverse_levinson_durbin ∘ levinson_durbin` are identities up to
//!   rounding for valid (positive-definite) autocorrelation.
//! - Shape-preserving on every batch axis; no cross-lane coupling.
//!
//! Conventions
//! -----------
//! - Free functions trust their input shape; the order-bound components
//!   validate it and return [`LpcError`] before computing.
//! - Ill-conditioned recursions are not errors: they propagate `inf`/`nan`.
//! - Only the stability check logs (a `tracing` warning under
//!   [`WarnType::Warn`]); buffer construction logs at debug level.
//!
//! Downstream usage
//! ----------------
//! - Analysis: estimate autocorrelation upstream, call
//!   [`LevinsonDurbin::forward`], and pass the result to synthesis filters.
//! - Training loops: route predicted coefficients through
//!   [`StabilityCheck::forward`] before [`ReverseLevinsonDurbin::forward`] or
//!   any all-pole filter.
//!
//! Testing notes
//! -------------
//! - Unit tests pin closed forms at orders 0–2 and every error branch.
//! - Integration tests in `tests/` cover batched round trips across orders
//!   `{0, 1, 2, 5, 14}`, stability postconditions and idempotence, and
//!   gradients via [`crate::autodiff`].

pub mod errors;
pub mod levdur;
pub mod parcor;
pub mod rlevdur;
pub mod stability;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{LpcError, LpcResult};
pub use self::levdur::{LevinsonDurbin, levinson_durbin, levinson_durbin_with_parcor};
pub use self::parcor::{LpcToParcor, ParcorToLpc, lpc_to_parcor, parcor_to_lpc};
pub use self::rlevdur::{ReverseLevinsonDurbin, reverse_levinson_durbin};
pub use self::stability::{
    DEFAULT_MARGIN, StabilityCheck, StabilityOptions, StabilityReport, WarnType,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can `use rust_lpc::lpc::prelude::*;` to import the
// component types in a single line.

pub mod prelude {
    pub use super::errors::{LpcError, LpcResult};
    pub use super::levdur::LevinsonDurbin;
    pub use super::parcor::{LpcToParcor, ParcorToLpc};
    pub use super::rlevdur::ReverseLevinsonDurbin;
    pub use super::stability::{StabilityCheck, StabilityOptions, WarnType};
}
