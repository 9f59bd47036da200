//! Iteration schemes for applying the scalar heat index to a grid.

use std::fmt;

/// How [`heat_index_array`](crate::heat_index_array) walks the grid.
///
/// All strategies produce the same values as [`Strategy::Elementwise`] to
/// within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Sequential per-element loop over the scalar function. The reference.
    #[default]
    Elementwise,
    /// Evaluate each term over the whole grid, then combine with boolean
    /// masks (`where`-style selection).
    Masked,
    /// Rayon parallel map of the scalar kernel.
    Parallel,
}

impl Strategy {
    /// Every strategy, reference first.
    pub const ALL: [Strategy; 3] = [Strategy::Elementwise, Strategy::Masked, Strategy::Parallel];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Elementwise => "elementwise",
            Strategy::Masked => "masked",
            Strategy::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
