//! Command-line front-end.
//!
//! Reads a text file, prints the adjacency listing to stdout, and writes
//! the DOT document for an external layout tool. Rendering the image is
//! left to the user:
//!
//! ```bash
//! wordgraph input.txt
//! dot -Tpng graph.dot -o graph.png
//! ```
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::env;
use std::io;
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;
use wordgraph_core::build_graph;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: wordgraph <input-file> [dot-path]");
        process::exit(2);
    }

    let input = &args[1];
    let dot_path = args.get(2).map(String::as_str).unwrap_or("graph.dot");

    let graph = match build_graph(input) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = graph.write_adjacency(&mut stdout) {
        eprintln!("error: failed to write report: {e}");
        process::exit(1);
    }

    if let Err(e) = graph.write_dot(Path::new(dot_path)) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    println!("{}", graph.stats());
    println!("render with: dot -Tpng {dot_path} -o graph.png");
}
