//! Errors for gradient evaluation and gradient checking.

/// Result alias for [`crate::autodiff`] routines.
pub type GradientResult<T> = Result<T, GradientError>;

#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    // ---- Input ----
    /// Gradient of a function of zero inputs was requested.
    EmptyInput,

    // ---- Gradient ----
    /// Forward-mode gradient produced NaN/±inf.
    NonFiniteGradient { index: usize, value: f64 },

    /// Forward-mode and finite-difference gradients disagree.
    GradientMismatch { index: usize, analytic: f64, numeric: f64, tolerance: f64 },

    /// Tolerance for the gradient check must be finite and > 0.
    InvalidTolerance { value: f64 },
}

impl std::error::Error for GradientError {}

impl std::fmt::Display for GradientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input ----
            GradientError::EmptyInput => write!(f, "Gradient Error: input has no elements"),

            // ---- Gradient ----
            GradientError::NonFiniteGradient { index, value } => {
                write!(f, "Gradient Error: non-finite gradient at index {index}: {value}")
            }
            GradientError::GradientMismatch { index, analytic, numeric, tolerance } => write!(
                f,
                "Gradient Error: mismatch at index {index}: forward-mode {analytic}, \
                 finite-difference {numeric} (tolerance {tolerance})"
            ),
            GradientError::InvalidTolerance { value } => {
                write!(f, "Gradient Error: tolerance must be finite and positive, got {value}")
            }
        }
    }
}
