//! Row-atomic CSV output.
//!
//! Every row is encoded into a scratch buffer first and only then queued,
//! so a failed write never leaves part of a row in the output. Queued bytes
//! are handed to the underlying writer once they pass a threshold; bytes it
//! does not accept stay queued and are retried on the next drain.

use std::io::{self, Write};
use std::mem;

use csv::WriterBuilder;

/// Queued bytes that trigger a drain before the next row is accepted.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 64 * 1024;

/// CSV writer that emits whole rows or nothing.
pub struct RowWriter<W: Write> {
    inner: W,
    builder: WriterBuilder,
    pending: Vec<u8>,
    scratch: Vec<u8>,
    threshold: usize,
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_threshold(inner, DEFAULT_FLUSH_THRESHOLD)
    }

    pub fn with_threshold(inner: W, threshold: usize) -> Self {
        let mut builder = WriterBuilder::new();
        builder.flexible(true);
        Self {
            inner,
            builder,
            pending: Vec::new(),
            scratch: Vec::new(),
            threshold,
        }
    }

    /// Encode one row and queue it.
    ///
    /// # Errors
    ///
    /// Returns the error of the drain that had to run first. The row is then
    /// not queued, and rows queued earlier are kept for the next attempt.
    pub fn write_row<I, T>(&mut self, fields: I) -> csv::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        if self.pending.len() >= self.threshold {
            self.drain()?;
        }
        let mut encoder = self.builder.from_writer(mem::take(&mut self.scratch));
        encoder.write_record(fields)?;
        let mut row = encoder.into_inner().map_err(|e| e.into_error())?;
        self.pending.extend_from_slice(&row);
        row.clear();
        self.scratch = row;
        Ok(())
    }

    /// Bytes encoded but not yet accepted by the underlying writer.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drain every queued byte and flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }

    fn drain(&mut self) -> io::Result<()> {
        let mut written = 0;
        let result = loop {
            if written == self.pending.len() {
                break Ok(());
            }
            match self.inner.write(&self.pending[written..]) {
                Ok(0) => break Err(io::ErrorKind::WriteZero.into()),
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Err(e),
            }
        };
        self.pending.drain(..written);
        result
    }
}

impl<W: Write> Drop for RowWriter<W> {
    fn drop(&mut self) {
        // Errors here have nowhere to go; explicit flushes report them.
        let _ = self.flush();
    }
}
