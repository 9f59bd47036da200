//! Rayon-backed parallel map over grid elements.
//!
//! Each output element is written by exactly one worker, so no
//! synchronisation is needed beyond rayon's join.

use ndarray::{Array, ArrayView, Dimension, Zip};
use swelter_formula::heat_index;

/// Applies [`heat_index`] across the grid on rayon's global pool.
///
/// Shapes must already match.
pub(crate) fn apply<D: Dimension>(
    temp: ArrayView<'_, f64, D>,
    rh: ArrayView<'_, f64, D>,
) -> Array<f64, D> {
    Zip::from(temp).and(rh).par_map_collect(|&t, &r| heat_index(t, r))
}
