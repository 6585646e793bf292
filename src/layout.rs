//! Layout validation and wide-to-long conversion for panel data.
//!
//! Regression routines expect panel variables stacked in long format: all
//! units' observations for period 0, then all units for period 1, and so
//! on. `check_panel` accepts either that long layout or a wide layout (one
//! row per unit, one column per period) and returns the long form together
//! with variable names reconciled to it.

use ndarray::{s, Array1, Array2, ArrayView2, Axis};

use crate::error::PanelError;
use crate::names::{strip_digits, VarName};
use crate::weights::SpatialWeights;

/// Long-format panel produced by [`check_panel`].
#[derive(Debug, Clone)]
pub struct StackedPanel {
    /// Dependent variable, n*t x 1.
    pub y: Array2<f64>,
    /// Independent variables, n*t x k.
    pub x: Array2<f64>,
    /// Resolved dependent-variable name, if one was supplied.
    pub name_y: Option<String>,
    /// Resolved independent-variable names, if supplied.
    pub name_x: Option<Vec<String>>,
}

/// Validate the layout of `y` and `x` against the unit count of `w` and
/// convert from wide to long format if needed.
///
/// `y` is either nt x 1 (long) or n x t (wide). In long format `x` has one
/// column per variable; in wide format each variable occupies t adjacent
/// columns. Neither array may include a constant term. Inputs are never
/// modified.
///
/// # Errors
///
/// * [`PanelError::UnbalancedPanel`] if the unit count does not evenly
///   divide the rows of `y`.
/// * [`PanelError::NameCountMismatch`] if `name_x` has neither k nor k*t
///   elements.
pub fn check_panel<W: SpatialWeights>(
    y: &Array2<f64>,
    x: &Array2<f64>,
    w: &W,
    name_y: Option<VarName>,
    name_x: Option<Vec<String>>,
) -> Result<StackedPanel, PanelError> {
    let units = w.unit_count();
    if units == 0 || y.nrows() % units != 0 {
        return Err(PanelError::UnbalancedPanel {
            rows: y.nrows(),
            units,
        });
    }

    let (bigy, bigx, t, k) = if y.ncols() > 1 {
        // Wide format: one row per unit, t columns per period.
        log::warn!(
            "assuming time data is in wide format, i.e. y[:, 0] refers to T0, \
             y[:, 1] refers to T1, etc.; similarly, x[:, 0..T] refers to the T \
             periods of k1, x[:, T..2T] refers to k2, etc."
        );
        let (n, t) = (y.nrows(), y.ncols());
        // Integer division: trailing x columns beyond k*t are ignored.
        let k = x.ncols() / t;
        let bigy = stack_periods(&y.view()).insert_axis(Axis(1));
        let mut bigx = Array2::zeros((n * t, k));
        for i in 0..k {
            let col = stack_periods(&x.slice(s![.., i * t..(i + 1) * t]));
            bigx.column_mut(i).assign(&col);
        }
        (bigy, bigx, t, k)
    } else {
        // Long format: already stacked, pass through.
        log::warn!(
            "assuming time data is in long format, i.e. y[0..N] refers to T0, \
             y[N..2N] refers to T1, etc.; similar for x"
        );
        let t = y.nrows() / units;
        (y.clone(), x.clone(), t, x.ncols())
    };

    let name_y = name_y.and_then(VarName::resolve);
    let name_x = match name_x {
        Some(names) if !names.is_empty() => Some(condense_names(names, k, t)?),
        _ => None,
    };

    Ok(StackedPanel {
        y: bigy,
        x: bigx,
        name_y,
        name_x,
    })
}

/// Flatten an n x t block so that all units' values for one period are
/// contiguous (column-major order).
fn stack_periods(block: &ArrayView2<f64>) -> Array1<f64> {
    block.t().iter().copied().collect()
}

/// Reduce a per-period name list to one label per variable.
fn condense_names(names: Vec<String>, k: usize, t: usize) -> Result<Vec<String>, PanelError> {
    if names.len() != k && names.len() != k * t {
        return Err(PanelError::NameCountMismatch {
            given: names.len(),
            k,
            t,
        });
    }
    if names.len() > k {
        // One label per period was given; keep one per variable.
        Ok((0..k).map(|i| strip_digits(&names[i * t])).collect())
    } else {
        Ok(names)
    }
}
