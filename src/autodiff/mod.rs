//! autodiff — forward-mode differentiation through the transforms.
//!
//! Purpose
//! -------
//! Make every transform in the crate differentiable without hand-written
//! adjoints. The recursions are generic over [`crate::numerics::Scalar`];
//! instantiating them with [`Dual`] propagates exact tangents through each
//! unrolled order step.
//!
//! Key behaviors
//! -------------
//! - [`Dual`] implements the arithmetic traits and [`crate::numerics::Scalar`].
//! - [`gradient`] builds a full gradient of a scalar loss by seeding one
//!   input element at a time.
//! - [`check_gradient`] validates that gradient against central finite
//!   differences computed with `finitediff`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Clipped entries (stability projection) contribute a zero tangent.
//! - Ill-conditioned recursions propagate non-finite tangents exactly as they
//!   propagate non-finite values; nothing is masked.
//!
//! Testing notes
//! -------------
//! - Unit tests cover dual arithmetic rules, clipping tangents, and the
//!   gradient checker's error paths. Integration tests in `tests/` check that
//!   gradients through each transform are finite, non-zero, and agree with
//!   finite differences.

pub mod dual;
pub mod errors;
pub mod gradient;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::dual::Dual;
pub use self::errors::{GradientError, GradientResult};
pub use self::gradient::{check_gradient, gradient};
