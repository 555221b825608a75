//! Error types for the selene-chart crate.

/// Error type for all fallible operations in the selene-chart crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// Returned when the bar width is zero.
    #[error("chart width must be >= 1, got {width}")]
    InvalidWidth {
        /// The invalid width.
        width: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_width() {
        let e = ChartError::InvalidWidth { width: 0 };
        assert_eq!(e.to_string(), "chart width must be >= 1, got 0");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ChartError>();
    }
}
