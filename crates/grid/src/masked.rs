//! Bulk evaluation with boolean masks.
//!
//! Each term is computed over the entire grid, then a `where`-style
//! selection keeps it only where its guard holds. Terms evaluated outside
//! their guard (NaN from the dry adjustment's square root, for example) are
//! discarded by the mask, never propagated.

use ndarray::{Array, ArrayView, Dimension, Zip};
use swelter_formula::{
    dry_adjustment, dry_adjustment_applies, full_regression, humid_adjustment,
    humid_adjustment_applies, simple_regression, uses_full_regression,
};

/// Evaluates `f` at every `(temp, rh)` pair.
fn bulk<D, F, R>(temp: &ArrayView<'_, f64, D>, rh: &ArrayView<'_, f64, D>, f: F) -> Array<R, D>
where
    D: Dimension,
    F: Fn(f64, f64) -> R,
{
    Zip::from(temp).and(rh).map_collect(|&t, &r| f(t, r))
}

/// Element-wise `mask ? then : otherwise`.
fn select<D: Dimension>(
    mask: &Array<bool, D>,
    then: &Array<f64, D>,
    otherwise: &Array<f64, D>,
) -> Array<f64, D> {
    Zip::from(mask)
        .and(then)
        .and(otherwise)
        .map_collect(|&m, &a, &b| if m { a } else { b })
}

/// Element-wise logical AND of two masks.
fn both<D: Dimension>(lhs: &Array<bool, D>, rhs: &Array<bool, D>) -> Array<bool, D> {
    Zip::from(lhs).and(rhs).map_collect(|&a, &b| a && b)
}

/// Applies the heat index with whole-grid term evaluation and masking.
///
/// Shapes must already match.
pub(crate) fn apply<D: Dimension>(
    temp: ArrayView<'_, f64, D>,
    rh: ArrayView<'_, f64, D>,
) -> Array<f64, D> {
    let simple = bulk(&temp, &rh, simple_regression);

    let full_mask = simple.mapv(uses_full_regression);
    let hi = select(&full_mask, &bulk(&temp, &rh, full_regression), &simple);

    let dry_mask = both(&full_mask, &bulk(&temp, &rh, dry_adjustment_applies));
    let dried = Zip::from(&hi)
        .and(&bulk(&temp, &rh, dry_adjustment))
        .map_collect(|&h, &d| h - d);
    let hi = select(&dry_mask, &dried, &hi);

    let humid_mask = both(&full_mask, &bulk(&temp, &rh, humid_adjustment_applies));
    let humidified = Zip::from(&hi)
        .and(&bulk(&temp, &rh, humid_adjustment))
        .map_collect(|&h, &a| h + a);
    select(&humid_mask, &humidified, &hi)
}
