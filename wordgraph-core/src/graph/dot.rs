//! DOT emission.
//!
//! Serializes the graph into the textual graph-description grammar an
//! external layout tool (Graphviz `dot`) consumes:
//!
//! ```text
//! digraph G {
//!   "to" -> "be" [label="2"];
//! }
//! ```
//!
//! Emission order is fixed: lexicographic by (source, destination), so
//! equal graph values always serialize to byte-identical documents.

use std::fs;
use std::path::Path;

use crate::graph::types::WordGraph;
use tracing::debug;
use wordgraph_types::GraphError;

impl WordGraph {
    /// Serializes the graph as a DOT document.
    ///
    /// One header line, one two-space-indented edge line per edge, one
    /// trailing `}` line. Tokens are quoted unconditionally even though
    /// the letter-only tokenization policy never requires escaping; this
    /// keeps the output parser-friendly should the policy ever be relaxed.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let edges = self.sorted_edges();
        let mut out = String::with_capacity(16 + edges.len() * 32);

        out.push_str("digraph G {\n");
        for (src, dst, w) in edges {
            out.push_str(&format!("  \"{src}\" -> \"{dst}\" [label=\"{w}\"];\n"));
        }
        out.push_str("}\n");

        out
    }

    /// Writes the DOT document to `path`.
    ///
    /// The file handle is scoped to the write and released on every exit
    /// path. A failure may leave a truncated document behind; no other
    /// on-disk state is touched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::OutputUnwritable`] when the document cannot
    /// be created or fully written.
    pub fn write_dot(&self, path: &Path) -> Result<(), GraphError> {
        let doc = self.to_dot();
        fs::write(path, &doc).map_err(|e| GraphError::OutputUnwritable {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = doc.len(), "graph document written");
        Ok(())
    }
}
