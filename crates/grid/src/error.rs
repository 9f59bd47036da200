//! Error types for the swelter-grid crate.

/// Error type for all fallible operations in the swelter-grid crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Returned when the temperature and humidity inputs differ in shape.
    ///
    /// Inputs are never broadcast or truncated to a common shape.
    #[error("shape mismatch: temp has shape {temp:?}, rh has shape {rh:?}")]
    ShapeMismatch {
        /// Shape of the temperature input.
        temp: Vec<usize>,
        /// Shape of the humidity input.
        rh: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shape_mismatch() {
        let e = GridError::ShapeMismatch {
            temp: vec![2, 2, 2],
            rh: vec![2, 2, 3],
        };
        let msg = e.to_string();
        assert!(msg.contains("[2, 2, 2]"));
        assert!(msg.contains("[2, 2, 3]"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<GridError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + 'static>() {}
        assert_impl::<GridError>();
    }
}
