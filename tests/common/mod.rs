//! Shared fixtures for the integration tests.
use ndarray::{ArrayD, Axis, IxDyn};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Purpose
/// -------
/// Build a batch of biased autocorrelation estimates from seeded uniform
/// noise.
///
/// Parameters
/// ----------
/// - `batch`: Number of independent lanes.
/// - `order`: LPC order `M`; each lane holds `M + 1` lags.
/// - `seed`: Seed for `StdRng`.
///
/// Returns
/// -------
/// - `ArrayD<f64>` of shape `[batch, M + 1]` with
///   `r[l] = (1/N) Σ_n x[n] x[n + l]` for a signal of length `N = 4 (M + 16)`.
///
/// Invariants
/// ----------
/// - The biased estimator is positive definite, so every lane is a valid
///   Levinson-Durbin input.
pub fn random_autocorrelation(batch: usize, order: usize, seed: u64) -> ArrayD<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = 4 * (order + 16);
    let mut r = ArrayD::<f64>::zeros(IxDyn(&[batch, order + 1]));
    for mut lane in r.lanes_mut(Axis(1)) {
        let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        for (lag, value) in lane.iter_mut().enumerate() {
            *value = (0..n - lag).map(|t| x[t] * x[t + lag]).sum::<f64>() / n as f64;
        }
    }
    r
}
