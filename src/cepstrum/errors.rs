//! Errors for the mel-cepstrum / MLSA coefficient transforms.

/// Result alias for cepstrum operations that may produce [`CepstrumError`].
pub type CepstrumResult<T> = Result<T, CepstrumError>;

#[derive(Debug, Clone, PartialEq)]
pub enum CepstrumError {
    // ---- Shape ----
    /// Input is 0-dimensional; a trailing coefficient axis is required.
    MissingCoefficientAxis,

    /// Trailing dimension does not equal `order + 1`.
    DimensionMismatch { what: &'static str, expected: usize, found: usize },

    // ---- Warping ----
    /// Frequency warping factor must be finite with |alpha| < 1.
    InvalidAlpha { value: f64, reason: &'static str },

    /// A dynamically warped transform was called without an alpha.
    MissingAlpha,
}

impl std::error::Error for CepstrumError {}

impl std::fmt::Display for CepstrumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Shape ----
            CepstrumError::MissingCoefficientAxis => {
                write!(f, "Cepstrum Error: input must have at least one axis")
            }
            CepstrumError::DimensionMismatch { what, expected, found } => {
                write!(f, "Cepstrum Error: dimension of {what} must be {expected}, found {found}")
            }

            // ---- Warping ----
            CepstrumError::InvalidAlpha { value, reason } => {
                write!(f, "Cepstrum Error: invalid alpha {value}: {reason}")
            }
            CepstrumError::MissingAlpha => write!(
                f,
                "Cepstrum Error: alpha was not bound at construction and must be supplied per call"
            ),
        }
    }
}
