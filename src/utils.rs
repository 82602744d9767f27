//! utils — lane helpers shared by every coefficient transform.
//!
//! Purpose
//! -------
//! Every transform in this crate maps each lane along the trailing
//! (coefficient) axis of an `ArrayD` independently. These helpers perform
//! that batching once so the transform modules only describe the per-lane
//! recursion.
//!
//! Conventions
//! -----------
//! - The coefficient axis is always the last axis; callers guarantee
//!   `ndim >= 1` through their validation modules before calling in.
//! - A zero-length coefficient axis has no lanes to transform; the helpers
//!   return an empty array of the same shape without calling `f`.
//! - Per-lane closures return freshly built `Vec`s; nothing is updated in
//!   place across recursion steps.

use ndarray::{ArrayD, ArrayView1, Axis, Zip};

use crate::numerics::scalar::Scalar;

/// Length of the trailing coefficient axis, or `None` for 0-d arrays.
pub fn coefficient_len<T>(x: &ArrayD<T>) -> Option<usize> {
    x.shape().last().copied()
}

/// map_lanes — apply a per-lane transform along the coefficient axis.
///
/// `f` receives each non-empty input lane and must return a lane of the
/// same length; the result has the shape of `x`.
///
/// Panics
/// ------
/// - Panics if `x` is 0-dimensional.
pub fn map_lanes<T, F>(x: &ArrayD<T>, mut f: F) -> ArrayD<T>
where
    T: Scalar,
    F: FnMut(ArrayView1<'_, T>) -> Vec<T>,
{
    let axis = Axis(x.ndim() - 1);
    let mut out = ArrayD::zeros(x.raw_dim());
    if x.len_of(axis) == 0 {
        return out;
    }
    Zip::from(out.lanes_mut(axis)).and(x.lanes(axis)).for_each(|mut dst, src| {
        let lane = f(src);
        dst.assign(&ArrayView1::from(&lane[..]));
    });
    out
}

/// map_lanes_pair — like [`map_lanes`] for transforms with two outputs.
pub fn map_lanes_pair<T, F>(x: &ArrayD<T>, mut f: F) -> (ArrayD<T>, ArrayD<T>)
where
    T: Scalar,
    F: FnMut(ArrayView1<'_, T>) -> (Vec<T>, Vec<T>),
{
    let axis = Axis(x.ndim() - 1);
    let mut first = ArrayD::zeros(x.raw_dim());
    let mut second = ArrayD::zeros(x.raw_dim());
    if x.len_of(axis) == 0 {
        return (first, second);
    }
    Zip::from(first.lanes_mut(axis)).and(second.lanes_mut(axis)).and(x.lanes(axis)).for_each(
        |mut dst1, mut dst2, src| {
            let (lane1, lane2) = f(src);
            dst1.assign(&ArrayView1::from(&lane1[..]));
            dst2.assign(&ArrayView1::from(&lane2[..]));
        },
    );
    (first, second)
}
