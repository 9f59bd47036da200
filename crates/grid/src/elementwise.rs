//! Sequential loop over every grid element.

use ndarray::{Array, ArrayView, Dimension};
use swelter_formula::heat_index;

/// Applies [`heat_index`] to each element pair in logical order.
///
/// Shapes must already match.
pub(crate) fn apply<D: Dimension>(
    temp: ArrayView<'_, f64, D>,
    rh: ArrayView<'_, f64, D>,
) -> Array<f64, D> {
    let mut out = Array::zeros(temp.raw_dim());
    for ((hi, &t), &r) in out.iter_mut().zip(temp.iter()).zip(rh.iter()) {
        *hi = heat_index(t, r);
    }
    out
}
