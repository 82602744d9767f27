//! Errors for the LPC / parcor transforms (shape and domain preconditions,
//! stability-check configuration, and detected instability).
//!
//! ## Conventions
//! - Lane indices are 0-based and count lanes in row-major order over the
//!   leading (batch) axes.
//! - Ill-conditioned recursions (zero or negative prediction error, unit
//!   reflection coefficients) are **not** errors: they surface as `inf`/`nan`
//!   in the returned arrays.

/// Result alias for LPC operations that may produce [`LpcError`].
pub type LpcResult<T> = Result<T, LpcError>;

/// Unified error type for the LPC subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum LpcError {
    // ---- Shape ----
    /// Input is 0-dimensional; a trailing coefficient axis is required.
    MissingCoefficientAxis,

    /// Trailing dimension does not equal `order + 1`.
    DimensionMismatch { what: &'static str, expected: usize, found: usize },

    // ---- Domain ----
    /// Gain `a[..., 0]` must be finite and > 0.
    NonPositiveGain { lane: usize, value: f64 },

    // ---- Stability options ----
    /// Margin must lie strictly inside (0, 1).
    InvalidMargin { value: f64, reason: &'static str },

    /// Unknown warning policy name.
    InvalidWarnType { name: String },

    // ---- Stability ----
    /// At least one lane had a reflection coefficient with `|k| >= 1`.
    UnstableCoefficients { unstable_lanes: usize, max_abs_parcor: f64 },
}

impl std::error::Error for LpcError {}

impl std::fmt::Display for LpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            LpcError::MissingCoefficientAxis => {
                write!(f, "LPC Error: input must have at least one axis")
            }
            LpcError::DimensionMismatch { what, expected, found } => {
                write!(f, "LPC Error: dimension of {what} must be {expected}, found {found}")
            }

            // ---- Domain ----
            LpcError::NonPositiveGain { lane, value } => {
                write!(f, "LPC Error: gain must be positive, lane {lane} has {value}")
            }

            // ---- Stability options ----
            LpcError::InvalidMargin { value, reason } => {
                write!(f, "LPC Error: invalid stability margin {value}: {reason}")
            }
            LpcError::InvalidWarnType { name } => write!(
                f,
                "LPC Error: unknown warning type '{name}' (expected ignore, warn, or exit)"
            ),

            // ---- Stability ----
            LpcError::UnstableCoefficients { unstable_lanes, max_abs_parcor } => write!(
                f,
                "LPC Error: detected unstable LPC coefficients in {unstable_lanes} lane(s) \
                 (max |k| = {max_abs_parcor})"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Spot-check that `Display` carries the offending values.
    //
    // Given
    // -----
    // - A dimension mismatch and an instability report.
    //
    // Expect
    // ------
    // - Messages mention the expected/found sizes and the lane count.
    fn display_includes_offending_values() {
        let dim = LpcError::DimensionMismatch { what: "LPC coefficients", expected: 4, found: 3 };
        assert_eq!(
            dim.to_string(),
            "LPC Error: dimension of LPC coefficients must be 4, found 3"
        );

        let unstable = LpcError::UnstableCoefficients { unstable_lanes: 2, max_abs_parcor: 1.2 };
        assert!(unstable.to_string().contains("2 lane(s)"));
    }
}
