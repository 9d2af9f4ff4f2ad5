//! Core types for the wordgraph adjacency-graph builder.
//!
//! This crate provides the types shared across the wordgraph ecosystem.
//! Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and any front-end share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Edge weight: the number of times an adjacency pair appears in the input.
///
/// A weight is always >= 1 once the edge exists; absent edges are simply
/// not stored.
pub type Weight = u32;

/// Errors surfaced by the graph-building pipeline.
///
/// Every failure is deterministic and user-actionable; nothing is retried
/// or suppressed internally. Variants that involve the filesystem carry the
/// offending path so front-ends can name it in their messages.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The input filename was empty or absent.
    #[error("input file path must not be empty")]
    InvalidParameter,

    /// The input file does not exist or is not readable at all.
    #[error("cannot open input file {}: {source}", path.display())]
    InputMissing {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The input file exists but reading it failed partway through.
    #[error("failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        /// Path that failed mid-read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The graph-description document could not be created or fully written.
    #[error("failed to write graph document {}: {source}", path.display())]
    OutputUnwritable {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl GraphError {
    /// Classifies a read failure for `path` into the matching variant.
    ///
    /// `NotFound` and `PermissionDenied` mean the file was never readable;
    /// anything else indicates a failure mid-read.
    pub fn from_read(path: &std::path::Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => GraphError::InputMissing {
                path: path.to_path_buf(),
                source,
            },
            _ => GraphError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Graph construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether tokens are folded to lowercase before becoming vertices.
    ///
    /// Enabled by default so that `The` and `the` denote the same vertex.
    /// Disabling reproduces the behavior of tools that treat differently
    /// cased spellings as distinct vertices.
    pub case_fold: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { case_fold: true }
    }
}

impl GraphConfig {
    /// Canonical configuration: tokens are lowercased (the default).
    pub const fn folded() -> Self {
        Self { case_fold: true }
    }

    /// Case-preserving configuration: `The` and `the` are distinct vertices.
    pub const fn case_sensitive() -> Self {
        Self { case_fold: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_config_folds_case() {
        assert!(GraphConfig::default().case_fold);
        assert_eq!(GraphConfig::default(), GraphConfig::folded());
        assert!(!GraphConfig::case_sensitive().case_fold);
    }

    #[test]
    fn error_messages_name_the_path() {
        let err = GraphError::InputMissing {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));

        let err = GraphError::OutputUnwritable {
            path: PathBuf::from("out/graph.dot"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/graph.dot"));
    }

    #[test]
    fn read_errors_classified_by_kind() {
        let path = Path::new("input.txt");

        let missing =
            GraphError::from_read(path, io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(missing, GraphError::InputMissing { .. }));

        let denied = GraphError::from_read(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(denied, GraphError::InputMissing { .. }));

        let truncated = GraphError::from_read(
            path,
            io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
        );
        assert!(matches!(truncated, GraphError::InputUnreadable { .. }));
    }

    #[test]
    fn errors_expose_io_source() {
        use std::error::Error as _;
        let err = GraphError::from_read(Path::new("x"), io::Error::other("disk on fire"));
        assert!(err.source().is_some());
    }
}
