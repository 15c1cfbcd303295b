//! Record normalization pipeline.
//!
//! The pipeline is a single pass over the input:
//! 1. **Header**: read one row and copy it to the output verbatim
//! 2. **Rows**: for every following row
//!    - validate fields (invalid UTF-8 is replaced, never rejected)
//!    - check the width and build a [`Record`]
//!    - normalize it in place
//!    - write it, or report a diagnostic and drop it
//! 3. **Flush**: release buffered output once the input is exhausted
//!
//! Per-row failures never stop the run. Only an I/O error on the input
//! stream or a failed final flush ends it early.
//!
//! The reader is lenient: with flexible widths and byte records, malformed
//! quoting is read as data, so the only read errors left are I/O errors.

use std::borrow::Cow;
use std::io::{Read, Write};

use csv::{ByteRecord, Reader, ReaderBuilder};
use csvnorm_model::{FIELD_COUNT, Record, validate_field};
use csvnorm_transform::Normalizer;
use tracing::{debug, info, trace};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{PipelineError, Result};
use crate::logging::redact_value;
use crate::output::RowWriter;
use crate::types::PipelineStats;

/// Normalize every data row of `input` into `output`.
///
/// The header row is passed through unchanged whatever its width. Data rows
/// must have exactly [`FIELD_COUNT`] fields. Failed rows are reported to
/// `diagnostics` and omitted from the output.
///
/// # Errors
///
/// Returns [`PipelineError::Read`] if the input stream fails, after flushing
/// the rows already written, and [`PipelineError::Flush`] if buffered output
/// cannot be written out.
pub fn run_pipeline<R, W, D>(
    input: R,
    output: W,
    diagnostics: &mut D,
    normalizer: &Normalizer,
) -> Result<PipelineStats>
where
    R: Read,
    W: Write,
    D: DiagnosticSink + ?Sized,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    // Dropping the writer also flushes it, which covers any early exit.
    let mut writer = RowWriter::new(output);

    let mut run = Run {
        stats: PipelineStats::default(),
        diagnostics,
    };
    let mut row = ByteRecord::new();

    if let Err(error) = copy_header(&mut reader, &mut writer, &mut row, &mut run) {
        flush(&mut writer)?;
        return Err(error);
    }

    loop {
        match reader.read_byte_record(&mut row) {
            Ok(false) => break,
            Ok(true) => {
                run.stats.rows_read += 1;
                process_row(&row, normalizer, &mut writer, &mut run);
            }
            Err(source) => {
                let line = reader.position().line().saturating_sub(1);
                flush(&mut writer)?;
                return Err(PipelineError::Read { line, source });
            }
        }
    }

    flush(&mut writer)?;
    let stats = run.stats;
    info!(
        rows_read = stats.rows_read,
        rows_written = stats.rows_written,
        rows_failed = stats.rows_failed,
        rows_skipped_empty = stats.rows_skipped_empty,
        "pipeline finished"
    );
    Ok(stats)
}

/// Mutable state threaded through one run.
struct Run<'a, D: DiagnosticSink + ?Sized> {
    stats: PipelineStats,
    diagnostics: &'a mut D,
}

impl<D: DiagnosticSink + ?Sized> Run<'_, D> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        debug!(
            category = diagnostic.category(),
            line = diagnostic.line(),
            "reporting diagnostic"
        );
        self.stats.diagnostics += 1;
        self.diagnostics.report(diagnostic);
    }
}

fn copy_header<R, W, D>(
    reader: &mut Reader<R>,
    writer: &mut RowWriter<W>,
    row: &mut ByteRecord,
    run: &mut Run<'_, D>,
) -> Result<()>
where
    R: Read,
    W: Write,
    D: DiagnosticSink + ?Sized,
{
    match reader.read_byte_record(row) {
        Ok(true) => match writer.write_row(row.iter()) {
            Ok(()) => {
                run.stats.header_written = true;
                debug!(columns = row.len(), "copied header row");
            }
            Err(source) => run.report(&Diagnostic::Write { line: 1, source }),
        },
        Ok(false) => run.report(&Diagnostic::MissingHeader),
        Err(source) => {
            run.report(&Diagnostic::HeaderRead {
                reason: source.to_string(),
            });
            return Err(PipelineError::Read { line: 0, source });
        }
    }
    Ok(())
}

fn process_row<W, D>(
    row: &ByteRecord,
    normalizer: &Normalizer,
    writer: &mut RowWriter<W>,
    run: &mut Run<'_, D>,
) where
    W: Write,
    D: DiagnosticSink + ?Sized,
{
    let line = row.position().map_or(0, csv::Position::line);

    if row.is_empty() {
        run.stats.rows_skipped_empty += 1;
        return;
    }

    let mut repaired = 0u64;
    let fields: Vec<String> = row
        .iter()
        .map(|field| match validate_field(field) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                repaired += 1;
                text
            }
        })
        .collect();
    if repaired > 0 {
        debug!(line, repaired, "replaced invalid UTF-8 in fields");
        run.stats.fields_repaired += repaired;
    }

    let raw = fields.join(",");
    trace!(line, row = redact_value(&raw), "read row");

    let fields: [String; FIELD_COUNT] = match fields.try_into() {
        Ok(fields) => fields,
        Err(fields) => {
            run.stats.rows_failed += 1;
            run.report(&Diagnostic::RowFormat {
                line,
                reason: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
                raw,
            });
            return;
        }
    };

    let mut record = Record::from_fields(fields);
    if let Err(source) = normalizer.normalize(&mut record) {
        run.stats.rows_failed += 1;
        run.report(&Diagnostic::Normalize { line, source, raw });
        return;
    }

    match writer.write_row(record.fields()) {
        Ok(()) => run.stats.rows_written += 1,
        Err(source) => {
            run.stats.rows_failed += 1;
            run.report(&Diagnostic::Write { line, source });
        }
    }
}

fn flush<W: Write>(writer: &mut RowWriter<W>) -> Result<()> {
    writer
        .flush()
        .map_err(|source| PipelineError::Flush { source })
}
