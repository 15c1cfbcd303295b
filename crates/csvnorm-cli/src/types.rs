use std::time::Duration;

/// Counters for one pipeline run.
///
/// `rows_written + rows_failed + rows_skipped_empty == rows_read` always
/// holds once the run returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// The header row reached the output.
    pub header_written: bool,
    /// Data rows read, excluding the header.
    pub rows_read: u64,
    /// Data rows normalized and written.
    pub rows_written: u64,
    /// Data rows dropped because of a format, normalization or write error.
    pub rows_failed: u64,
    /// Completely empty data rows skipped without a diagnostic.
    pub rows_skipped_empty: u64,
    /// Fields whose invalid UTF-8 was replaced.
    pub fields_repaired: u64,
    /// Diagnostics reported, including header errors.
    pub diagnostics: u64,
}

impl PipelineStats {
    pub fn has_errors(&self) -> bool {
        self.rows_failed > 0
    }

    pub fn is_balanced(&self) -> bool {
        self.rows_written + self.rows_failed + self.rows_skipped_empty == self.rows_read
    }
}

/// Outcome of one `csvnorm` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub input: String,
    pub output: String,
    pub stats: PipelineStats,
    pub elapsed: Duration,
}
