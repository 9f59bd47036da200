//! Heat index over n-dimensional temperature and humidity grids.
//!
//! Two equal-shaped inputs produce an output of the same shape whose every
//! element is [`swelter_formula::heat_index`] of the corresponding inputs.
//! The walk over the grid is selected with a [`Strategy`]:
//!
//! | Strategy | Scheme |
//! |----------|--------|
//! | `Elementwise` | sequential per-element loop (reference) |
//! | `Masked` | whole-grid terms combined with boolean masks |
//! | `Parallel` | rayon parallel map of the scalar kernel |
//!
//! # Quick start
//!
//! ```
//! use ndarray::Array3;
//! use swelter_grid::{Strategy, heat_index_array};
//!
//! let temp = Array3::from_elem((2, 2, 2), 95.0);
//! let rh = Array3::from_elem((2, 2, 2), 0.10);
//!
//! let hi = heat_index_array(&temp, &rh, Strategy::Parallel).unwrap();
//! assert_eq!(hi.shape(), &[2, 2, 2]);
//! assert!((hi[[1, 1, 1]] - 87.329_208_091_8).abs() < 1e-9);
//! ```
//!
//! Inputs of different shape are rejected with [`GridError::ShapeMismatch`];
//! they are never broadcast.

mod elementwise;
mod error;
mod masked;
mod parallel;
mod strategy;

pub use error::GridError;
pub use strategy::Strategy;

use ndarray::{Array, ArrayBase, ArrayView1, Data, Dimension};
use rayon::prelude::*;
use swelter_formula::heat_index;
use tracing::trace;

/// Computes the heat index for every element of two equal-shaped grids.
///
/// `temp` is in °F and `rh` is a 0-1 humidity fraction. The output has the
/// shape of the inputs and standard (row-major) layout.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if `temp` and `rh` differ in shape.
#[tracing::instrument(skip(temp, rh), fields(n = temp.len()))]
pub fn heat_index_array<S1, S2, D>(
    temp: &ArrayBase<S1, D>,
    rh: &ArrayBase<S2, D>,
    strategy: Strategy,
) -> Result<Array<f64, D>, GridError>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    if temp.shape() != rh.shape() {
        return Err(GridError::ShapeMismatch {
            temp: temp.shape().to_vec(),
            rh: rh.shape().to_vec(),
        });
    }

    let out = match strategy {
        Strategy::Elementwise => elementwise::apply(temp.view(), rh.view()),
        Strategy::Masked => masked::apply(temp.view(), rh.view()),
        Strategy::Parallel => parallel::apply(temp.view(), rh.view()),
    };
    // Zip-collected outputs follow the input layout.
    let out = if out.is_standard_layout() {
        out
    } else {
        out.as_standard_layout().into_owned()
    };
    trace!(%strategy, "grid evaluated");
    Ok(out)
}

/// Computes the heat index for two equal-length flat buffers.
///
/// # Errors
///
/// Returns [`GridError::ShapeMismatch`] if the buffers differ in length.
#[tracing::instrument(skip(temp, rh), fields(n = temp.len()))]
pub fn heat_index_slice(
    temp: &[f64],
    rh: &[f64],
    strategy: Strategy,
) -> Result<Vec<f64>, GridError> {
    if temp.len() != rh.len() {
        return Err(GridError::ShapeMismatch {
            temp: vec![temp.len()],
            rh: vec![rh.len()],
        });
    }

    let out = match strategy {
        Strategy::Elementwise => temp
            .iter()
            .zip(rh)
            .map(|(&t, &r)| heat_index(t, r))
            .collect(),
        Strategy::Masked => masked::apply(ArrayView1::from(temp), ArrayView1::from(rh))
            .iter()
            .copied()
            .collect(),
        Strategy::Parallel => temp
            .par_iter()
            .zip(rh.par_iter())
            .map(|(&t, &r)| heat_index(t, r))
            .collect(),
    };
    Ok(out)
}
