//! numerics — scalar abstraction and small dense kernels.
//!
//! Purpose
//! -------
//! Hold the pieces every transform relies on but none owns: the
//! [`Scalar`] trait that lets recursions run on floats and dual numbers
//! alike, and the unit-triangular solve used by the reverse Levinson-Durbin
//! recursion.
//!
//! Conventions
//! -----------
//! - Kernels here never validate domain preconditions; shape agreement is
//!   guaranteed by the callers in [`crate::lpc`] and [`crate::cepstrum`].
//! - No logging, no global state.

pub mod scalar;
pub mod triangular;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::scalar::Scalar;
pub use self::triangular::{eye, solve_unit_upper_triangular};
