//! Traversal orchestration.
//!
//! [`MetricsCollector`] walks the function declarations of one or more
//! compilation units in front-end order, builds one record per
//! resolvable declaration, and streams each record to the emitter the
//! moment it is built. Records are emitted in exactly the order their
//! units were visited; the collector never re-sorts. Ordering across
//! units is therefore the front end's contract — it must enumerate
//! declarations in a stable, deterministic order (e.g. by source
//! position).

use std::io::Write;

use tracing::debug;

use crate::cfg::ControlFlowGraph;
use crate::error::Result;
use crate::function::FunctionUnit;
use crate::metrics::FunctionMetrics;
use crate::output::RecordEmitter;

/// Collects per-function metrics and streams them to a CSV sink.
///
/// One collector serves a whole run: multiple compilation units may be
/// fed through [`collect_unit`](Self::collect_unit) and share a single
/// header row. The ordered records remain available afterwards via
/// [`records`](Self::records).
///
/// # Examples
///
/// ```
/// use funcstat::cfg::{BasicBlock, ControlFlowGraph};
/// use funcstat::collector::MetricsCollector;
/// use funcstat::function::{FunctionUnit, Signature};
///
/// # fn main() -> anyhow::Result<()> {
/// let unit = FunctionUnit::new(
///     "hello",
///     "hello.go",
///     1,
///     Some(Signature::new(vec![], vec![])),
///     "func hello() {}".as_bytes(),
/// );
/// let graph = ControlFlowGraph::new(vec![BasicBlock::new(vec![], true)]);
///
/// let mut collector = MetricsCollector::new(Vec::new());
/// collector.collect_unit("example.com/hello", vec![(unit, graph)])?;
/// assert_eq!(collector.records().len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct MetricsCollector<W: Write> {
    emitter: RecordEmitter<W>,
    records: Vec<FunctionMetrics>,
}

impl<W: Write> MetricsCollector<W> {
    /// Create a collector writing to the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            emitter: RecordEmitter::new(sink),
            records: Vec::new(),
        }
    }

    /// Analyze one compilation unit.
    ///
    /// Consumes a lazy sequence of function declarations with their
    /// control-flow graphs, in front-end order. Declarations whose
    /// signature cannot be resolved are skipped silently. The first
    /// record of the run triggers the one-time header emission.
    ///
    /// # Errors
    ///
    /// A sink write failure aborts the remaining traversal immediately
    /// and surfaces here; rows already flushed stand, with no rollback.
    pub fn collect_unit<I>(&mut self, package: &str, functions: I) -> Result<()>
    where
        I: IntoIterator<Item = (FunctionUnit, ControlFlowGraph)>,
    {
        for (unit, graph) in functions {
            let Some(metrics) = FunctionMetrics::build(&unit, &graph) else {
                debug!(
                    name = %unit.name,
                    file = %unit.file,
                    "skipping declaration with unresolved signature"
                );
                continue;
            };

            self.emitter.emit_record(package, &metrics)?;
            self.records.push(metrics);
        }
        Ok(())
    }

    /// The records built so far, in emission order.
    pub fn records(&self) -> &[FunctionMetrics] {
        &self.records
    }

    /// Consume the collector, returning the ordered records.
    pub fn into_records(self) -> Vec<FunctionMetrics> {
        self.records
    }

    /// Consume the collector, returning the records and the sink.
    pub fn finish(self) -> Result<(Vec<FunctionMetrics>, W)> {
        let sink = self.emitter.into_inner()?;
        Ok((self.records, sink))
    }
}
