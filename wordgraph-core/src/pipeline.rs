//! End-to-end pipeline entry points.
//!
//! Front-ends (CLI, GUI, tests) drive the core through these two
//! functions; everything else is composition of [`WordGraph`] methods.

use std::path::Path;

use crate::graph::{GraphStats, WordGraph};
use tracing::info;
use wordgraph_types::GraphError;

/// Builds a word-adjacency graph from the file named by `input`.
///
/// # Errors
///
/// Returns [`GraphError::InvalidParameter`] for an empty filename and the
/// read-failure variants from [`WordGraph::ingest_file`].
pub fn build_graph(input: &str) -> Result<WordGraph, GraphError> {
    if input.is_empty() {
        return Err(GraphError::InvalidParameter);
    }

    let mut graph = WordGraph::new();
    graph.ingest_file(Path::new(input))?;
    Ok(graph)
}

/// Builds the graph from `input` and writes its DOT document to `dot_path`.
///
/// Returns a statistics snapshot on success. The whole pipeline either
/// completes or fails; no partial state survives apart from a possibly
/// truncated output document on write failure.
///
/// # Errors
///
/// Propagates every failure from [`build_graph`] and
/// [`WordGraph::write_dot`] untouched.
pub fn build_and_emit(input: &str, dot_path: &Path) -> Result<GraphStats, GraphError> {
    let graph = build_graph(input)?;
    graph.write_dot(dot_path)?;

    let stats = graph.stats();
    info!(
        input,
        dot = %dot_path.display(),
        vertices = stats.vertices,
        edges = stats.edges,
        "graph built and emitted"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;
    use wordgraph_types::GraphError;

    fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn empty_filename_is_invalid_parameter() {
        assert!(matches!(build_graph(""), Err(GraphError::InvalidParameter)));
    }

    #[test]
    fn missing_file_reported_with_path() {
        let err = build_graph("definitely/not/here.txt").unwrap_err();
        match err {
            GraphError::InputMissing { path, .. } => {
                assert!(path.to_string_lossy().contains("here.txt"));
            }
            other => panic!("expected InputMissing, got {other:?}"),
        }
    }

    #[test]
    fn builds_graph_from_file() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "input.txt", "To be, or not to be!");

        let graph = build_graph(input.to_str().unwrap()).unwrap();
        assert_eq!(graph.weight("to", "be"), Some(2));
        assert_eq!(graph.tokens_seen(), 6);
    }

    #[test]
    fn emits_dot_document() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "input.txt", "the quick brown fox");
        let dot_path = dir.path().join("graph.dot");

        let stats = build_and_emit(input.to_str().unwrap(), &dot_path).unwrap();
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.total_weight, 3);

        let doc = fs::read_to_string(&dot_path).unwrap();
        assert!(doc.starts_with("digraph G {\n"));
        assert!(doc.ends_with("}\n"));
        assert!(doc.contains("  \"the\" -> \"quick\" [label=\"1\"];\n"));
    }

    #[test]
    fn empty_file_emits_header_and_footer_only() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "empty.txt", "");
        let dot_path = dir.path().join("graph.dot");

        let stats = build_and_emit(input.to_str().unwrap(), &dot_path).unwrap();
        assert_eq!(stats.edges, 0);
        assert_eq!(stats.tokens, 0);

        let doc = fs::read_to_string(&dot_path).unwrap();
        assert_eq!(doc, "digraph G {\n}\n");
    }

    #[test]
    fn unwritable_output_reported_with_path() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "input.txt", "a b");
        let dot_path = dir.path().join("no/such/dir/graph.dot");

        let err = build_and_emit(input.to_str().unwrap(), &dot_path).unwrap_err();
        match err {
            GraphError::OutputUnwritable { path, .. } => {
                assert!(path.to_string_lossy().contains("graph.dot"));
            }
            other => panic!("expected OutputUnwritable, got {other:?}"),
        }
    }

    #[test]
    fn emitted_document_is_stable_across_runs() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "input.txt", "a b a c a b d c a");
        let p1 = dir.path().join("one.dot");
        let p2 = dir.path().join("two.dot");

        build_and_emit(input.to_str().unwrap(), &p1).unwrap();
        build_and_emit(input.to_str().unwrap(), &p2).unwrap();

        assert_eq!(fs::read(&p1).unwrap(), fs::read(&p2).unwrap());
    }
}
