//! Domain errors shared by both ensembles
//!
//! Argument problems are reported through [`EnsembleError`] so the binaries
//! can map them to the exact console text and exit code. Everything else in
//! the crate propagates `anyhow::Error` (see [`crate::Result`]).

use thiserror::Error;

/// Errors raised while validating arguments or awaiting workers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnsembleError {
    /// Fewer positional arguments than the program needs
    #[error("missing arguments")]
    Usage,

    /// A positional argument is not an integer
    #[error("argument '{argument}' is not a valid integer")]
    Parse { argument: String },

    /// `max < min`
    #[error("invalid range: max ({hi}) is below min ({lo})")]
    InvalidRange { lo: i64, hi: i64 },

    /// Worker count below 1
    #[error("invalid worker count: {count} (must be >= 1)")]
    InvalidWorkerCount { count: i64 },

    /// A worker thread terminated abnormally before it could be joined
    #[error("interrupted while waiting for {worker}")]
    JoinInterrupted { worker: String },
}

impl EnsembleError {
    /// Process exit code for this error
    ///
    /// A usage request is not a failure; every other argument error is.
    pub fn exit_code(&self) -> u8 {
        match self {
            EnsembleError::Usage => 0,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EnsembleError::Usage.exit_code(), 0);
        assert_eq!(EnsembleError::Parse { argument: "x".into() }.exit_code(), 1);
        assert_eq!(EnsembleError::InvalidRange { lo: 7, hi: 3 }.exit_code(), 1);
        assert_eq!(EnsembleError::InvalidWorkerCount { count: 0 }.exit_code(), 1);
    }

    #[test]
    fn test_join_interrupted_message() {
        let err = EnsembleError::JoinInterrupted { worker: "worker 3".into() };
        assert_eq!(err.to_string(), "interrupted while waiting for worker 3");
    }
}
