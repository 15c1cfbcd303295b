//! Errors that stop the pipeline.

use thiserror::Error;

/// Failure that ends a run early. Per-row problems never end up here; they
/// are reported as [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input stream itself failed.
    #[error("cannot read input after line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Buffered output could not be flushed at the end of the run.
    #[error("cannot flush output: {source}")]
    Flush {
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline runs.
pub type Result<T> = std::result::Result<T, PipelineError>;
