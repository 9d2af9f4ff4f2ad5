//! Console adjacency report.

use std::io;

use crate::graph::types::WordGraph;
use smallvec::SmallVec;
use wordgraph_types::Weight;

impl WordGraph {
    /// Renders the human-readable adjacency listing.
    ///
    /// One line per source vertex in the form `src -> dst1(w1) dst2(w2)`,
    /// destinations separated by a single space and each line terminated
    /// by a newline. Sources and destinations appear in lexicographic
    /// order. An empty graph renders as an empty string.
    #[must_use]
    pub fn adjacency_report(&self) -> String {
        let mut sources: SmallVec<[&str; 32]> = self.sources().collect();
        sources.sort_unstable();

        let mut out = String::new();
        for src in sources {
            let mut dsts: SmallVec<[(&str, Weight); 16]> = self.edges_from(src).collect();
            dsts.sort_unstable_by(|a, b| a.0.cmp(b.0));

            out.push_str(src);
            out.push_str(" ->");
            for (dst, w) in dsts {
                out.push(' ');
                out.push_str(&format!("{dst}({w})"));
            }
            out.push('\n');
        }
        out
    }

    /// Streams the adjacency listing to a writer (typically stdout).
    pub fn write_adjacency<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.adjacency_report().as_bytes())
    }
}
