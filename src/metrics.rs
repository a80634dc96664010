//! Per-function metrics record.
//!
//! One immutable [`FunctionMetrics`] record is built per successfully
//! analyzed function: source extent (lines and bytes of the rendered
//! declaration), signature arity, and cyclomatic complexity from the
//! function's control-flow graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::cfg::ControlFlowGraph;
use crate::complexity::compute_cyclomatic;
use crate::function::FunctionUnit;

/// Structural metrics for one function definition.
///
/// Constructed exactly once per function and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetrics {
    /// The declared function name.
    pub name: String,

    /// Base name of the source file (directory components stripped).
    pub file: String,

    /// The line of the declaration (1-indexed).
    pub line: usize,

    /// Number of physical source lines in the declaration's span.
    pub line_count: usize,

    /// Byte length of the declaration's rendered span.
    pub byte_size: usize,

    /// Number of declared parameters.
    pub param_count: usize,

    /// Number of declared results.
    pub result_count: usize,

    /// McCabe cyclomatic complexity of the function's control-flow graph.
    pub cyclomatic_complexity: u32,
}

impl FunctionMetrics {
    /// Build the metrics record for one function.
    ///
    /// Returns `None` when the unit's signature is unresolved — the
    /// declaration is not a real function and is excluded from the
    /// output stream without being reported.
    pub fn build(unit: &FunctionUnit, graph: &ControlFlowGraph) -> Option<Self> {
        let signature = unit.signature.as_ref()?;

        Some(Self {
            name: unit.name.clone(),
            file: base_name(&unit.file),
            line: unit.line,
            line_count: count_lines(&unit.source),
            byte_size: unit.source.len(),
            param_count: signature.param_count(),
            result_count: signature.result_count(),
            cyclomatic_complexity: compute_cyclomatic(graph),
        })
    }
}

impl fmt::Display for FunctionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{} {} lines: {}, bytes: {}, params: {}, returns: {}, cyclomatic: {}",
            self.file,
            self.line,
            self.name,
            self.line_count,
            self.byte_size,
            self.param_count,
            self.result_count,
            self.cyclomatic_complexity
        )
    }
}

/// Strips directory components from a file path.
fn base_name(file: &str) -> String {
    Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}

/// Counts newline-delimited lines with scanner semantics.
///
/// A final partial line without a trailing terminator counts as one
/// line; empty input has zero lines.
fn count_lines(source: &[u8]) -> usize {
    let newlines = source.iter().filter(|&&b| b == b'\n').count();
    match source.last() {
        None => 0,
        Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    }
}
