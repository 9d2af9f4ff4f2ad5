//! Statistics and GraphStats.

use crate::graph::types::WordGraph;

/// A snapshot of graph statistics.
#[derive(Debug, Clone, Copy)]
pub struct GraphStats {
    /// Number of distinct vertices, including pure sinks.
    pub vertices: usize,
    /// Number of source vertices (with at least one outgoing edge).
    pub sources: usize,
    /// Number of distinct edges.
    pub edges: usize,
    /// Sum of all edge weights.
    pub total_weight: u64,
    /// Number of tokens observed during ingestion.
    pub tokens: u64,
}

impl WordGraph {
    /// Returns a statistics snapshot.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            sources: self.source_count(),
            edges: self.edge_count(),
            total_weight: self.total_weight(),
            tokens: self.tokens_seen(),
        }
    }
}

impl core::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} vertices, {} edges, total weight {}, {} tokens",
            self.vertices, self.edges, self.total_weight, self.tokens
        )
    }
}
