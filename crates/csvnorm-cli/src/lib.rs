//! Library side of the `csvnorm` command: the streaming pipeline, its
//! diagnostic channel and logging setup.

pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod types;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, WriterSink};
pub use error::PipelineError;
pub use output::RowWriter;
pub use pipeline::run_pipeline;
pub use types::{PipelineStats, RunResult};
