//! Fixed-effects demeaning of stacked panel variables.

use ndarray::{Array1, ArrayBase, Axis, Data, Dimension};

/// Subtract each unit's temporal mean from its observations.
///
/// `arr` holds one variable stacked in long format: element `p*n + u` is
/// the observation of unit `u` in period `p`. Multi-dimensional input is
/// flattened in logical order first, so an nt x 1 column keeps its
/// stacking order. The element count must equal `n * t`; a mismatch is a
/// caller bug and panics.
///
/// Returns a flat array of length n*t in the same stacking order. Data
/// that is already mean-zero per unit comes back unchanged.
pub fn demean_panel<S, D>(arr: &ArrayBase<S, D>, n: usize, t: usize) -> Array1<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let flat: Array1<f64> = arr.iter().copied().collect();
    // Rows are periods, columns are units; the stacking order makes this a
    // plain row-major reshape.
    let by_period = flat
        .into_shape((t, n))
        .expect("demean_panel: array length must equal n * t");
    let unit_means = by_period
        .mean_axis(Axis(0))
        .expect("demean_panel: at least one time period required");
    (by_period - &unit_means)
        .into_shape(n * t)
        .expect("demean_panel: n * t elements")
}
