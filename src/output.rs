//! CSV record emission.
//!
//! Serializes [`FunctionMetrics`] records to a tabular stream. The
//! header row is written exactly once per run, strictly before the
//! first data row, and every write is flushed before the next is
//! accepted so that a crash mid-run leaves a syntactically valid
//! partial table.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::metrics::FunctionMetrics;

/// Fixed column names, in emission order.
///
/// `package` comes from the caller's compilation-unit context, not
/// from the record itself.
pub const HEADER: [&str; 9] = [
    "package",
    "file",
    "line",
    "name",
    "lines",
    "bytes",
    "params",
    "returns",
    "cyclomatic complexity",
];

/// Header emission state, carried per emitter instance.
///
/// Explicit state rather than module-level globals, so independent
/// runs in one process never leak into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitterState {
    /// Nothing written yet; the next record triggers the header.
    NotStarted,
    /// Header written; only data rows follow.
    HeaderWritten,
}

/// Streaming CSV writer for function metrics records.
pub struct RecordEmitter<W: Write> {
    writer: csv::Writer<W>,
    state: EmitterState,
}

impl<W: Write> RecordEmitter<W> {
    /// Create an emitter over the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
            state: EmitterState::NotStarted,
        }
    }

    /// Current header state.
    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Write the header row if it has not been written yet.
    ///
    /// Idempotent; the header is never repeated, even across multiple
    /// compilation units sharing this emitter.
    pub fn emit_header(&mut self) -> Result<()> {
        if self.state == EmitterState::HeaderWritten {
            return Ok(());
        }
        self.writer.write_record(HEADER)?;
        self.writer.flush()?;
        self.state = EmitterState::HeaderWritten;
        Ok(())
    }

    /// Write one record row, emitting the header first if needed.
    ///
    /// The row is flushed before returning. On failure the remaining
    /// traversal must be aborted by the caller; rows already flushed
    /// remain valid.
    pub fn emit_record(&mut self, package: &str, metrics: &FunctionMetrics) -> Result<()> {
        self.emit_header()?;

        let record = [
            package.to_string(),
            metrics.file.clone(),
            metrics.line.to_string(),
            metrics.name.clone(),
            metrics.line_count.to_string(),
            metrics.byte_size.to_string(),
            metrics.param_count.to_string(),
            metrics.result_count.to_string(),
            metrics.cyclomatic_complexity.to_string(),
        ];
        self.writer.write_record(&record)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Unwrap the underlying sink, flushing any buffered output.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| crate::error::FuncstatError::Io(e.into_error()))
    }
}
