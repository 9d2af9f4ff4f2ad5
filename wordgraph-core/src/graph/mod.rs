//! Weighted directed word-adjacency graph.
//!
//! A token is a vertex; an edge `u -> v` with weight `n` records that the
//! token `u` was immediately followed by `v` exactly `n` times in the
//! ingested text. Construction is single-threaded and per-run: build,
//! read, discard.
//!
//! Presentation order is never a property of the graph itself; the DOT
//! emitter and the console reporter impose lexicographic order when they
//! serialize.

mod api;
mod dot;
mod report;
mod stats;
mod types;

pub use stats::GraphStats;
pub use types::WordGraph;
