//! Output persistence: one file per named graph.

use std::path::{Path, PathBuf};

use sqlrdf_core::NamedGraph;
use sqlrdf_serialize::GraphWriter;

use crate::error::Result;

/// Write every graph to `output_dir` with `writer`, in order. Returns the
/// paths written. The first failure aborts the remaining writes.
pub fn write_graphs(
    writer: &GraphWriter,
    output_dir: &Path,
    graphs: &[NamedGraph],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(graphs.len());
    for graph in graphs {
        let path = writer.write_file(output_dir, graph)?;
        tracing::info!(
            graph = %graph.name,
            triples = graph.graph.len(),
            path = %path.display(),
            format = %writer.format(),
            "Wrote graph"
        );
        written.push(path);
    }
    Ok(written)
}
