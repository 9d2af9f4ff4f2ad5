//! Public API for feeding text into the graph.

use std::fs;
use std::path::Path;

use crate::graph::types::WordGraph;
use rustc_hash::FxHashMap;
use tracing::debug;
use wordgraph_types::GraphError;

impl WordGraph {
    /// Ingests one document of raw bytes.
    ///
    /// The bytes are normalized (non-letters become separators), split
    /// into tokens, and each consecutive token pair `(a, b)` increments
    /// the weight of the edge `a -> b`, inserting it at 1 when absent.
    /// Tokens are folded to lowercase as they are interned, unless the
    /// configuration disables folding.
    ///
    /// Fewer than two tokens add no edges. Adjacent identical tokens
    /// produce a self-loop. Pairs never span `ingest` calls: each call is
    /// a separate token sequence.
    pub fn ingest(&mut self, content: &[u8]) {
        self.normalizer.normalize_into(content, &mut self.norm_buf);

        let fold = self.config.case_fold;
        let mut prev: Option<String> = None;
        let mut tokens = 0u64;

        let tokenizer = self.tokenizer;
        tokenizer.tokenize(&self.norm_buf, |text, _pos| {
            tokens += 1;

            let cur = if fold {
                text.to_ascii_lowercase()
            } else {
                text.to_owned()
            };

            if let Some(src) = prev.take() {
                let inner = self.edges.entry(src).or_insert_with(FxHashMap::default);
                *inner.entry(cur.clone()).or_insert(0) += 1;
            }

            prev = Some(cur);
        });

        self.tokens_seen += tokens;
        debug!(tokens, edges = self.edge_count(), "document ingested");
    }

    /// Reads a file and ingests its contents as one document.
    ///
    /// The file handle is scoped to the read; it is released before this
    /// returns on every path, including failure.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InputMissing`] when the file does not exist
    /// or cannot be opened, and [`GraphError::InputUnreadable`] when I/O
    /// fails mid-read.
    pub fn ingest_file(&mut self, path: &Path) -> Result<(), GraphError> {
        let bytes = fs::read(path).map_err(|e| GraphError::from_read(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read input file");
        self.ingest(&bytes);
        Ok(())
    }
}
