//! Cyclomatic Complexity Metric
//!
//! McCabe's cyclomatic complexity counts the linearly independent
//! execution paths through a function: `E - N + 2` for a connected
//! single-entry flow graph. This module computes it directly from the
//! control-flow graph rather than from syntax, so unreachable branches
//! never inflate the score.

use crate::cfg::ControlFlowGraph;

/// Computes cyclomatic complexity for a control-flow graph.
///
/// Sums `out_degree(b) - 1` over the live blocks and adds the constant
/// 2, which equals `E - N + 2` restricted to the entry-reachable
/// subgraph. Exit blocks (no successors) contribute `-1`; interior
/// blocks of a straight-line chain contribute `0`, so any single-entry
/// single-exit chain scores exactly 1 regardless of its length.
///
/// Degenerate graphs (no blocks, or no live blocks) yield the base
/// constant 2; a disconnected set of live exit blocks saturates at 0
/// instead of underflowing. Well-formedness is the front end's
/// responsibility, not this function's.
///
/// The result depends only on graph shape, never on iteration order.
///
/// # Examples
///
/// ```
/// use funcstat::cfg::{BasicBlock, BlockId, ControlFlowGraph};
/// use funcstat::complexity::compute_cyclomatic;
///
/// // entry -> exit, one straight path
/// let graph = ControlFlowGraph::new(vec![
///     BasicBlock::new(vec![BlockId(1)], true),
///     BasicBlock::new(vec![], true),
/// ]);
/// assert_eq!(compute_cyclomatic(&graph), 1);
/// ```
pub fn compute_cyclomatic(graph: &ControlFlowGraph) -> u32 {
    let mut complexity: i64 = 2;
    for block in graph.live_blocks() {
        complexity += block.out_degree() as i64 - 1;
    }
    complexity.max(0) as u32
}
