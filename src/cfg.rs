//! Control-flow graph input model.
//!
//! The analysis pass consumes control-flow graphs; it never builds them
//! from source. The front end hands over one [`ControlFlowGraph`] per
//! function, with the `live` flag on each block already describing
//! reachability from the entry block. [`CfgBuilder`] is a convenience
//! for front ends and tests that computes those flags itself; a
//! hand-assembled graph is equally valid input.

use serde::{Deserialize, Serialize};

/// Unique identifier for a basic block within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub usize);

/// A straight-line sequence of operations with one entry and one exit.
///
/// Blocks carry only what complexity computation needs: their outgoing
/// edges and whether they are reachable from the function's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicBlock {
    /// Successor blocks (outgoing edges).
    pub succs: Vec<BlockId>,

    /// Whether this block is reachable from the entry block.
    ///
    /// Dead blocks (`live == false`) represent unreachable code and are
    /// excluded from complexity computation.
    pub live: bool,
}

impl BasicBlock {
    /// Create a new block with the given successors and liveness.
    pub fn new(succs: Vec<BlockId>, live: bool) -> Self {
        Self { succs, live }
    }

    /// The number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.succs.len()
    }

    /// Whether this block has no successors (an exit block).
    pub fn is_exit(&self) -> bool {
        self.succs.is_empty()
    }
}

/// Directed graph of basic blocks for a single function body.
///
/// The block at index 0 is the entry block. A graph belongs to exactly
/// one function and is rebuilt fresh per analysis run; the pass never
/// caches or mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFlowGraph {
    /// All basic blocks; index 0 is the entry block.
    pub blocks: Vec<BasicBlock>,
}

impl ControlFlowGraph {
    /// Create a graph from pre-assembled blocks.
    pub fn new(blocks: Vec<BasicBlock>) -> Self {
        Self { blocks }
    }

    /// The entry block, if the graph is non-empty.
    pub fn entry(&self) -> Option<&BasicBlock> {
        self.blocks.first()
    }

    /// Iterator over the live (entry-reachable) blocks.
    pub fn live_blocks(&self) -> impl Iterator<Item = &BasicBlock> {
        self.blocks.iter().filter(|b| b.live)
    }

    /// Number of live blocks.
    pub fn live_count(&self) -> usize {
        self.live_blocks().count()
    }

    /// Start building a graph with computed liveness.
    pub fn builder() -> CfgBuilder {
        CfgBuilder::default()
    }
}

/// Incremental graph constructor that derives the `live` flags.
///
/// Blocks are added in order (the first becomes the entry block), edges
/// may reference blocks added later, and [`build`](Self::build) marks
/// every block reachable from the entry by depth-first traversal.
#[derive(Debug, Default)]
pub struct CfgBuilder {
    succs: Vec<Vec<BlockId>>,
}

impl CfgBuilder {
    /// Add a block with no successors yet, returning its id.
    pub fn add_block(&mut self) -> BlockId {
        self.succs.push(Vec::new());
        BlockId(self.succs.len() - 1)
    }

    /// Add a directed edge between two previously added blocks.
    ///
    /// Edges referencing unknown block ids are ignored.
    pub fn add_edge(&mut self, from: BlockId, to: BlockId) {
        if from.0 < self.succs.len() && to.0 < self.succs.len() {
            self.succs[from.0].push(to);
        }
    }

    /// Finish construction, computing liveness from the entry block.
    pub fn build(self) -> ControlFlowGraph {
        let mut live = vec![false; self.succs.len()];
        if !self.succs.is_empty() {
            let mut stack = vec![BlockId(0)];
            while let Some(BlockId(idx)) = stack.pop() {
                if live[idx] {
                    continue;
                }
                live[idx] = true;
                for succ in &self.succs[idx] {
                    if !live[succ.0] {
                        stack.push(*succ);
                    }
                }
            }
        }

        let blocks = self
            .succs
            .into_iter()
            .zip(live)
            .map(|(succs, live)| BasicBlock { succs, live })
            .collect();
        ControlFlowGraph { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = ControlFlowGraph::default();
        assert!(graph.entry().is_none());
        assert_eq!(graph.live_count(), 0);
    }

    #[test]
    fn test_builder_marks_entry_live() {
        let mut b = ControlFlowGraph::builder();
        b.add_block();
        let graph = b.build();
        assert!(graph.entry().unwrap().live);
        assert!(graph.entry().unwrap().is_exit());
    }

    #[test]
    fn test_builder_chain_all_live() {
        let mut b = ControlFlowGraph::builder();
        let b0 = b.add_block();
        let b1 = b.add_block();
        let b2 = b.add_block();
        b.add_edge(b0, b1);
        b.add_edge(b1, b2);
        let graph = b.build();
        assert_eq!(graph.live_count(), 3);
    }

    #[test]
    fn test_builder_unreachable_block_is_dead() {
        let mut b = ControlFlowGraph::builder();
        let b0 = b.add_block();
        let b1 = b.add_block();
        let orphan = b.add_block();
        b.add_edge(b0, b1);
        b.add_edge(orphan, b1);
        let graph = b.build();
        assert_eq!(graph.live_count(), 2);
        assert!(!graph.blocks[orphan.0].live);
    }

    #[test]
    fn test_builder_cycle_terminates() {
        let mut b = ControlFlowGraph::builder();
        let b0 = b.add_block();
        let b1 = b.add_block();
        b.add_edge(b0, b1);
        b.add_edge(b1, b0);
        let graph = b.build();
        assert_eq!(graph.live_count(), 2);
    }

    #[test]
    fn test_builder_ignores_unknown_edge() {
        let mut b = ControlFlowGraph::builder();
        let b0 = b.add_block();
        b.add_edge(b0, BlockId(7));
        let graph = b.build();
        assert!(graph.blocks[0].succs.is_empty());
    }
}
