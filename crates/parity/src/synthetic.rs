//! Random temperature and humidity grids for parity runs.

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::config::ParityConfig;
use crate::error::ParityError;

/// A pair of equal-shaped temperature (°F) and humidity-fraction grids.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticGrid {
    temp: ArrayD<f64>,
    rh: ArrayD<f64>,
}

impl SyntheticGrid {
    /// Samples both grids uniformly from half-open ranges.
    ///
    /// Temperatures are drawn for the whole grid first, then humidity, so a
    /// given RNG state always yields the same pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParityError::InvalidConfig`] if either range is empty or
    /// non-finite.
    pub fn generate<R: Rng + ?Sized>(
        shape: &[usize],
        temp_range: (f64, f64),
        rh_range: (f64, f64),
        rng: &mut R,
    ) -> Result<Self, ParityError> {
        let temp_dist = uniform("temp_range", temp_range)?;
        let rh_dist = uniform("rh_range", rh_range)?;
        let dim = IxDyn(shape);
        let temp = ArrayD::from_shape_fn(dim.clone(), |_| temp_dist.sample(&mut *rng));
        let rh = ArrayD::from_shape_fn(dim, |_| rh_dist.sample(&mut *rng));
        Ok(Self { temp, rh })
    }

    /// Samples grids with the shape and ranges of `config`.
    pub fn from_config<R: Rng + ?Sized>(
        config: &ParityConfig,
        rng: &mut R,
    ) -> Result<Self, ParityError> {
        Self::generate(config.shape(), config.temp_range(), config.rh_range(), rng)
    }

    /// Temperature grid.
    pub fn temp(&self) -> &ArrayD<f64> {
        &self.temp
    }

    /// Humidity-fraction grid.
    pub fn rh(&self) -> &ArrayD<f64> {
        &self.rh
    }

    /// Number of elements in each grid.
    pub fn len(&self) -> usize {
        self.temp.len()
    }

    /// Returns `true` if the grids hold no elements.
    pub fn is_empty(&self) -> bool {
        self.temp.is_empty()
    }
}

fn uniform(name: &str, (lo, hi): (f64, f64)) -> Result<Uniform<f64>, ParityError> {
    Uniform::new(lo, hi).map_err(|e| ParityError::InvalidConfig {
        reason: format!("{name} ({lo}, {hi}) is not a valid sampling range: {e}"),
    })
}
