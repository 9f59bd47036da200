//! Error types for the swelter-parity crate.

use swelter_grid::GridError;

/// Error type for all fallible operations in the swelter-parity crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParityError {
    /// Returned when a harness setting is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the grid kernels.
    #[error(transparent)]
    Grid(#[from] GridError),
}
