//! Graph type and read accessors.

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::tokenizer::Tokenizer;
use rustc_hash::{FxHashMap, FxHashSet};
use wordgraph_types::{GraphConfig, Weight};

/// Weighted directed word-adjacency graph.
///
/// Maps a source token to an inner mapping from destination token to
/// positive edge weight. Invariants:
///
/// - every stored weight is >= 1;
/// - a token appears as an outer key iff it has at least one outgoing
///   edge (pure sinks exist only as inner keys);
/// - self-loops are allowed (identical adjacent tokens);
/// - the sum of all weights equals `max(0, T - 1)` per ingested document,
///   where `T` is the document's token count.
///
/// Neither mapping level is ordered; presentation order is imposed at
/// emission time via [`WordGraph::sorted_edges`].
///
/// The graph owns its analysis pipeline (normalizer, tokenizer and a
/// reusable normalization buffer), so ingestion is a single call. It is
/// intentionally not shared across threads: construction is a strictly
/// single-threaded, per-run affair.
#[derive(Debug)]
pub struct WordGraph {
    pub(crate) edges: FxHashMap<String, FxHashMap<String, Weight>>,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) config: GraphConfig,
    pub(crate) norm_buf: String,
    pub(crate) tokens_seen: u64,
}

impl Default for WordGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WordGraph {
    /// Creates a new, empty graph with the default (case-folding) config.
    pub fn new() -> Self {
        Self {
            edges: FxHashMap::default(),
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
            config: GraphConfig::default(),
            norm_buf: String::with_capacity(256),
            tokens_seen: 0,
        }
    }

    /// Creates a new graph with custom configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Returns the weight of the edge `src -> dst`, if it exists.
    ///
    /// Lookups use stored (canonical) token spellings: lowercase under the
    /// default configuration.
    #[inline]
    #[must_use]
    pub fn weight(&self, src: &str, dst: &str) -> Option<Weight> {
        self.edges.get(src).and_then(|inner| inner.get(dst)).copied()
    }

    /// Returns `true` if the graph has no edges.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of source vertices (tokens with at least one outgoing edge).
    #[inline]
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct vertices, counting pure sinks.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (src, inner) in &self.edges {
            seen.insert(src.as_str());
            for dst in inner.keys() {
                seen.insert(dst.as_str());
            }
        }
        seen.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|inner| inner.len()).sum()
    }

    /// Sum of all edge weights.
    ///
    /// Equals `max(0, T - 1)` summed over ingested documents.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges
            .values()
            .flat_map(|inner| inner.values())
            .map(|&w| w as u64)
            .sum()
    }

    /// Total number of tokens observed by the sequencer.
    #[inline]
    #[must_use]
    pub fn tokens_seen(&self) -> u64 {
        self.tokens_seen
    }

    /// Iterates source vertices in unspecified order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Iterates the outgoing edges of `src` in unspecified order.
    pub fn edges_from<'a>(&'a self, src: &str) -> impl Iterator<Item = (&'a str, Weight)> + 'a {
        self.edges
            .get(src)
            .into_iter()
            .flat_map(|inner| inner.iter().map(|(dst, &w)| (dst.as_str(), w)))
    }

    /// Returns all edges sorted lexicographically by (source, destination).
    ///
    /// This is the deterministic view the emitter and reporter share;
    /// emitting the same graph value twice is byte-identical.
    #[must_use]
    pub fn sorted_edges(&self) -> Vec<(&str, &str, Weight)> {
        let mut out: Vec<(&str, &str, Weight)> = Vec::with_capacity(self.edge_count());
        for (src, inner) in &self.edges {
            for (dst, &w) in inner {
                out.push((src.as_str(), dst.as_str(), w));
            }
        }
        out.sort_unstable_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(b.1)));
        out
    }

    /// Removes all edges and resets the token counter.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.tokens_seen = 0;
    }
}
