//! Error types for shard reductions

use thiserror::Error;

/// Result type alias for reduction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while planning or running a reduction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied argument violates the call contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation has no defined result for an empty input
    #[error("Input is empty")]
    EmptyInput,

    /// The caller interrupted the reduction while it waited for workers
    #[error("Reduction was interrupted")]
    Interrupted,

    /// A shard computation returned an error or panicked
    #[error("Worker for shard {shard} failed: {message}")]
    WorkerFailure {
        /// Partition index of the failed shard
        shard: usize,
        /// Error or panic message reported by the shard
        message: String,
    },

    /// The OS refused to create a worker thread
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(String),
}

impl Error {
    pub(crate) fn worker_panicked(shard: usize, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(msg) = payload.downcast_ref::<&str>() {
            (*msg).to_string()
        } else if let Some(msg) = payload.downcast_ref::<String>() {
            msg.clone()
        } else {
            "worker panicked".to_string()
        };

        Error::WorkerFailure {
            shard,
            message: format!("panicked: {}", message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Spawn(err.to_string())
    }
}
