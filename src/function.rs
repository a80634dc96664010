//! Front-end input model for function declarations.
//!
//! The source-language front end (parser and type checker) is an
//! external collaborator. It enumerates function declarations per
//! compilation unit and hands each one over as a [`FunctionUnit`]: the
//! declaration's identity, its resolved signature, and the exact
//! textual re-serialization of its own span. The analysis pass reads
//! these and never mutates them.

use serde::{Deserialize, Serialize};

/// Resolved type signature of a function declaration.
///
/// Only the ordered type names are carried; the analysis pass consumes
/// the arities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Declared parameter types, in order.
    pub params: Vec<String>,

    /// Declared result types, in order.
    ///
    /// Empty for functions with no declared results.
    pub results: Vec<String>,
}

impl Signature {
    /// Create a signature from parameter and result type names.
    pub fn new(params: Vec<String>, results: Vec<String>) -> Self {
        Self { params, results }
    }

    /// Number of declared parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Number of declared results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

/// One function definition as supplied by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionUnit {
    /// The declared function name.
    pub name: String,

    /// The source file the declaration appears in.
    pub file: String,

    /// The line of the declaration (1-indexed).
    pub line: usize,

    /// The resolved signature.
    ///
    /// `None` when the identifier could not be resolved to a concrete
    /// function type (name shadowing, parser artifact). Such units are
    /// skipped, not reported.
    pub signature: Option<Signature>,

    /// Textual re-serialization of the declaration's own span.
    pub source: Vec<u8>,
}

impl FunctionUnit {
    /// Create a new function unit.
    pub fn new(
        name: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        signature: Option<Signature>,
        source: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            line,
            signature,
            source: source.into(),
        }
    }
}
