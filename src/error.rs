//! Error types for the funcstat analysis pass.

/// Result type alias for funcstat operations.
pub type Result<T> = std::result::Result<T, FuncstatError>;

/// Main error type for the funcstat analysis pass.
///
/// Only sink-side failures are representable: a declaration whose
/// signature cannot be resolved is skipped silently (see
/// [`FunctionMetrics::build`](crate::metrics::FunctionMetrics::build)),
/// and a malformed control-flow graph degrades to the base complexity
/// constant instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum FuncstatError {
    /// The output sink rejected a record or header write.
    #[error("Sink write error: {0}")]
    Sink(#[from] csv::Error),

    /// The output sink could not be flushed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FuncstatError {
    /// Check if this error originated in the output sink.
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_) | Self::Io(_))
    }
}
