//! Diagnostic channel for per-row errors.
//!
//! Every recoverable failure becomes one [`Diagnostic`], rendered as a single
//! line prefixed with its category, e.g.
//!
//! ```text
//! TimestampParseError: cannot parse Timestamp "bogus": expected M/D/YY h:mm:ss AM|PM for line "bogus,..."
//! ```

use std::io::Write;

use csvnorm_transform::NormalizeError;
use thiserror::Error;
use tracing::warn;

/// A recoverable error reported while processing the input.
#[derive(Debug, Error)]
pub enum Diagnostic {
    /// The header row could not be read.
    #[error("cannot read header: {reason}")]
    HeaderRead { reason: String },

    /// The input ended before a header row.
    #[error("input has no header row")]
    MissingHeader,

    /// A data row has the wrong number of fields or could not be parsed.
    #[error("line {line}: {reason} for line \"{raw}\"")]
    RowFormat {
        line: u64,
        reason: String,
        raw: String,
    },

    /// A normalization rule failed for a data row.
    #[error("{source} for line \"{raw}\"")]
    Normalize {
        line: u64,
        #[source]
        source: NormalizeError,
        raw: String,
    },

    /// A row could not be written to the output.
    #[error("line {line}: cannot write row: {source}")]
    Write {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

impl Diagnostic {
    /// Error category label, used as the line prefix.
    pub fn category(&self) -> &'static str {
        match self {
            Self::HeaderRead { .. } | Self::MissingHeader => "HeaderReadError",
            Self::RowFormat { .. } => "RowFormatError",
            Self::Normalize { source, .. } => source.kind(),
            Self::Write { .. } => "WriteError",
        }
    }

    /// Input line the diagnostic refers to, when known.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::RowFormat { line, .. }
            | Self::Normalize { line, .. }
            | Self::Write { line, .. } => Some(*line),
            Self::HeaderRead { .. } | Self::MissingHeader => None,
        }
    }

    /// Render as one diagnostic line, without the trailing newline.
    pub fn render(&self) -> String {
        format!("{}: {self}", self.category())
    }
}

/// Destination for diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Writes one line per diagnostic to a [`Write`], typically stderr.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        let result = writeln!(self.writer, "{}", diagnostic.render())
            .and_then(|()| self.writer.flush());
        if let Err(error) = result {
            warn!(%error, category = diagnostic.category(), "failed to write diagnostic");
        }
    }
}

/// Keeps rendered diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub lines: Vec<String>,
    pub categories: Vec<&'static str>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.lines.push(diagnostic.render());
        self.categories.push(diagnostic.category());
    }
}
