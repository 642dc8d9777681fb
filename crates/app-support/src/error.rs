//! Application error types.

use thiserror::Error;

/// Failure of an application run.
///
/// The providers and compositions cannot fail; only emitting the result can.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing the output line failed (closed pipe, full disk, ...).
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_output_error_message_includes_cause() {
        let err = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to write output: pipe closed");
    }

    #[test]
    fn test_output_error_exposes_source() {
        use std::error::Error as _;

        let err = AppError::from(io::Error::other("boom"));
        assert!(err.source().is_some());
    }
}
