//! LPC stability check — project coefficients onto the stable region.
//!
//! Purpose
//! -------
//! Guarantee that LPC coefficients describe a stable all-pole filter by
//! clipping their reflection coefficients into `[-(1 - margin), 1 - margin]`,
//! with a configurable diagnostic when instability is detected.
//!
//! Key behaviors
//! -------------
//! - Convert each lane of `a` to parcor `k` with a guarded step-down, flag
//!   lanes with any `|k_i| >= 1` (`i >= 1`), and rebuild only the lanes
//!   with some `|k_i| > 1 - margin`: their `k[1..]` are clipped to the
//!   effective bound and turned back into `a` by step-up. The gain
//!   `k[0] = a[0]` is never clipped and lanes within bounds pass through
//!   untouched.
//! - [`StabilityCheck::project`] always returns the corrected coefficients
//!   together with diagnostics and never fails on instability.
//! - [`StabilityCheck::forward`] applies the [`WarnType`] policy on top of
//!   `project`: `Ignore` returns silently, `Warn` emits a `tracing` warning,
//!   `Fail` returns [`LpcError::UnstableCoefficients`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 < margin < 1` (validated by [`StabilityOptions::new`]).
//! - Clipping is applied regardless of the policy; a caller that needs the
//!   corrected value under `Fail` should call `project` directly.
//! - The effective bound is `min(1 - margin, 1 - sqrt(ε))` with `ε` the
//!   machine epsilon of the element type. The rebuilt coefficients then
//!   decompose again to reflection coefficients within `1 - margin`, and a
//!   second projection leaves them unchanged.
//! - A step-down step with `k_m = ±1` exactly divides by `1 - b²` for the
//!   effective bound `b` instead of by zero, so such lanes stay finite.
//!
//! Conventions
//! -----------
//! - Default options are `margin = 1e-16` and `WarnType::Warn`. In `f64`,
//!   `1 - 1e-16` is `0.9999999999999999`; the effective default bound is
//!   `1 - sqrt(f64::EPSILON) ≈ 1 - 1.5e-8`.

use std::str::FromStr;

use ndarray::{ArrayD, ArrayView1, Axis, Zip};

use crate::{
    lpc::{
        errors::{LpcError, LpcResult},
        parcor::{parcor_to_lpc_lane, step_down_lane},
        validation::{validate_coefficient_axis, validate_gain, validate_margin},
    },
    numerics::scalar::Scalar,
};

/// Default stability margin.
pub const DEFAULT_MARGIN: f64 = 1e-16;

/// WarnType — reaction to detected instability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarnType {
    /// Correct silently.
    Ignore,
    /// Correct and emit a `tracing` warning.
    #[default]
    Warn,
    /// Correct and report [`LpcError::UnstableCoefficients`].
    Fail,
}

impl FromStr for WarnType {
    type Err = LpcError;

    /// Accepts `ignore`, `warn`, and `exit` (or its alias `fail`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(WarnType::Ignore),
            "warn" => Ok(WarnType::Warn),
            "exit" | "fail" => Ok(WarnType::Fail),
            _ => Err(LpcError::InvalidWarnType { name: s.to_string() }),
        }
    }
}

/// StabilityOptions — validated configuration for [`StabilityCheck`].
///
/// Fields
/// ------
/// - `margin`: `f64`
///   Distance kept from the unit bound; strictly inside (0, 1).
/// - `warn_type`: [`WarnType`]
///   Diagnostic policy on detected instability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityOptions {
    margin: f64,
    warn_type: WarnType,
}

impl StabilityOptions {
    /// Errors
    /// ------
    /// - `LpcError::InvalidMargin` unless `0 < margin < 1` and finite.
    pub fn new(margin: f64, warn_type: WarnType) -> LpcResult<Self> {
        validate_margin(margin)?;
        Ok(StabilityOptions { margin, warn_type })
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn warn_type(&self) -> WarnType {
        self.warn_type
    }

    /// Largest admissible reflection-coefficient magnitude, `1 - margin`.
    pub fn bound(&self) -> f64 {
        1.0 - self.margin
    }

    /// Clip target for element type `T`: `min(1 - margin, 1 - sqrt(ε_T))`.
    pub fn effective_bound<T: Scalar>(&self) -> f64 {
        self.bound().min(1.0 - T::epsilon().sqrt())
    }
}

impl Default for StabilityOptions {
    fn default() -> Self {
        StabilityOptions { margin: DEFAULT_MARGIN, warn_type: WarnType::default() }
    }
}

/// StabilityReport — corrected coefficients plus what the check found.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityReport<T> {
    /// Stable LPC coefficients, same shape as the input.
    pub coefficients: ArrayD<T>,
    /// Number of lanes with at least one `|k_i| >= 1`.
    pub unstable_lanes: usize,
    /// Largest `|k_i|` (`i >= 1`) seen before clipping; `0` for order 0.
    /// For a lane with `k_m = ±1` the lower orders come from the guarded
    /// step-down.
    pub max_abs_parcor: f64,
}

impl<T> StabilityReport<T> {
    pub fn is_stable(&self) -> bool {
        self.unstable_lanes == 0
    }
}

/// StabilityCheck — order-bound stability projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityCheck {
    order: usize,
    options: StabilityOptions,
}

impl StabilityCheck {
    pub fn new(order: usize, options: StabilityOptions) -> Self {
        StabilityCheck { order, options }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn options(&self) -> &StabilityOptions {
        &self.options
    }

    /// project — clip reflection coefficients and report instability.
    ///
    /// Returns
    /// -------
    /// `LpcResult<StabilityReport<T>>`
    ///   Corrected coefficients and diagnostics; instability never produces
    ///   an error here.
    ///
    /// Errors
    /// ------
    /// - `LpcError::MissingCoefficientAxis` / `LpcError::DimensionMismatch`
    ///   when `a` does not end in an axis of length `M+1`.
    /// - `LpcError::NonPositiveGain` when any lane has `a[..., 0] <= 0`.
    pub fn project<T: Scalar>(&self, a: &ArrayD<T>) -> LpcResult<StabilityReport<T>> {
        validate_coefficient_axis(a, self.order, "LPC coefficients")?;
        validate_gain(a)?;

        let axis = Axis(a.ndim() - 1);
        let threshold = self.options.bound();
        let bound = T::from_f64(self.options.effective_bound::<T>());

        let mut coefficients = a.clone();
        let mut unstable_lanes = 0;
        let mut max_abs_parcor = 0.0_f64;
        Zip::from(coefficients.lanes_mut(axis)).and(a.lanes(axis)).for_each(|mut dst, src| {
            let k = step_down_lane(src, Some(bound));
            let lane_max = k.iter().skip(1).map(|v| v.to_f64().abs()).fold(0.0_f64, f64::max);
            if lane_max >= 1.0 {
                unstable_lanes += 1;
            }
            max_abs_parcor = max_abs_parcor.max(lane_max);

            if lane_max > threshold {
                let clipped: Vec<T> = k
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| if i == 0 { v } else { v.clip(-bound, bound) })
                    .collect();
                let rebuilt = parcor_to_lpc_lane(ArrayView1::from(&clipped[..]));
                dst.assign(&ArrayView1::from(&rebuilt[..]));
            }
        });

        Ok(StabilityReport { coefficients, unstable_lanes, max_abs_parcor })
    }

    /// forward — stable coefficients under the configured [`WarnType`].
    ///
    /// Under `WarnType::Fail` the error carries only the diagnostics. To
    /// obtain the corrected coefficients as well, call
    /// [`StabilityCheck::project`] and inspect [`StabilityReport::is_stable`]
    /// (check-then-call).
    ///
    /// Errors
    /// ------
    /// - Any precondition error from [`StabilityCheck::project`].
    /// - `LpcError::UnstableCoefficients` under `WarnType::Fail` when any lane
    ///   is unstable.
    pub fn forward<T: Scalar>(&self, a: &ArrayD<T>) -> LpcResult<ArrayD<T>> {
        let report = self.project(a)?;
        if report.is_stable() {
            return Ok(report.coefficients);
        }
        match self.options.warn_type {
            WarnType::Ignore => Ok(report.coefficients),
            WarnType::Warn => {
                tracing::warn!(
                    order = self.order,
                    unstable_lanes = report.unstable_lanes,
                    max_abs_parcor = report.max_abs_parcor,
                    "detected unstable LPC coefficients"
                );
                Ok(report.coefficients)
            }
            WarnType::Fail => Err(LpcError::UnstableCoefficients {
                unstable_lanes: report.unstable_lanes,
                max_abs_parcor: report.max_abs_parcor,
            }),
        }
    }
}
