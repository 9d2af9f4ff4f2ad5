//! Word-adjacency graph builder.
//!
//! Turns a plain-text document into a weighted directed graph: each
//! lowercase word token is a vertex, and an edge `u -> v` with weight `n`
//! records that `u` was immediately followed by `v` exactly `n` times.
//! The graph serializes to a stable DOT document for an external layout
//! tool and to a human-readable adjacency listing.
//!
//! Pipeline: raw bytes → [`analyzer::TextNormalizer`] (non-letters become
//! separators) → [`analyzer::Tokenizer`] (ordered word tokens) →
//! [`WordGraph`] (adjacency accounting) → DOT emitter / console report.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let stats = wordgraph_core::build_and_emit("input.txt", Path::new("graph.dot"))?;
//! println!("{stats}");
//! # Ok::<(), wordgraph_core::GraphError>(())
//! ```

pub mod analyzer;
pub mod graph;
mod pipeline;

pub use graph::{GraphStats, WordGraph};
pub use pipeline::{build_and_emit, build_graph};
pub use wordgraph_types::{GraphConfig, GraphError, Weight};
