//! Funcstat - Per-Function Structural Metrics
//!
//! A static-analysis pass that computes structural metrics for every
//! function definition in a body of source code and emits them as a
//! flat CSV record stream:
//! - Source extent (physical lines and bytes of the rendered declaration)
//! - Signature shape (parameter and result counts)
//! - Cyclomatic complexity derived from the function's control-flow graph
//!
//! The source-language front end (parsing, type resolution, CFG
//! construction) is an external collaborator consumed through a narrow
//! read-only interface: a lazy sequence of [`FunctionUnit`]s paired
//! with their [`ControlFlowGraph`]s.
//!
//! # Quick Start
//!
//! ```
//! use funcstat::{BasicBlock, BlockId, ControlFlowGraph, FunctionUnit, MetricsCollector, Signature};
//!
//! # fn main() -> anyhow::Result<()> {
//! let unit = FunctionUnit::new(
//!     "add",
//!     "math/add.go",
//!     3,
//!     Some(Signature::new(
//!         vec!["int".to_string(), "int".to_string()],
//!         vec!["int".to_string()],
//!     )),
//!     "func add(a, b int) int {\n\treturn a + b\n}".as_bytes(),
//! );
//!
//! // entry -> exit: a straight-line body, complexity 1
//! let graph = ControlFlowGraph::new(vec![
//!     BasicBlock::new(vec![BlockId(1)], true),
//!     BasicBlock::new(vec![], true),
//! ]);
//!
//! let mut collector = MetricsCollector::new(Vec::new());
//! collector.collect_unit("example.com/math", vec![(unit, graph)])?;
//!
//! let (records, csv) = collector.finish()?;
//! assert_eq!(records[0].line_count, 3);
//! assert_eq!(records[0].cyclomatic_complexity, 1);
//! assert!(String::from_utf8(csv).unwrap().starts_with("package,file,line,name"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`cfg`] - Control-flow graph input model and liveness builder
//! - [`complexity`] - McCabe cyclomatic complexity over live blocks
//! - [`function`] - Front-end declaration model (units, signatures)
//! - [`metrics`] - The per-function record and its constructor
//! - [`collector`] - Order-stable traversal and streaming emission
//! - [`output`] - CSV serialization with one-time header state
//! - [`error`] - Error types
//!
//! The whole pipeline is single-threaded and synchronous: traversal,
//! metric computation, and emission run to completion on one logical
//! thread per invocation. An external driver may process independent
//! compilation units in parallel only with one sink per unit.

pub mod cfg;
pub mod collector;
pub mod complexity;
pub mod error;
pub mod function;
pub mod metrics;
pub mod output;

// Re-export main types
pub use cfg::{BasicBlock, BlockId, CfgBuilder, ControlFlowGraph};
pub use collector::MetricsCollector;
pub use complexity::compute_cyclomatic;
pub use error::{FuncstatError, Result};
pub use function::{FunctionUnit, Signature};
pub use metrics::FunctionMetrics;
pub use output::{EmitterState, RecordEmitter, HEADER};
