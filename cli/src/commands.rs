pub mod classify;
pub mod edges;
pub mod tour;

use anyhow::{Context, Result};
use eulertour::{DEMO_START, Graph, GraphFile, VertexId, demo_graph};

/// Load the requested graph, or the bundled demo graph, along with the
/// start vertex the source suggests.
pub(crate) fn load_graph(args: &crate::cli::GraphArgs) -> Result<(Graph, Option<VertexId>)> {
    match &args.graph {
        Some(path) => {
            tracing::info!("loading graph from {}", path.display());
            let file = GraphFile::read(path).with_context(|| format!("reading {}", path.display()))?;
            let start = file.start;
            Ok((file.into_graph()?, start))
        }
        None => Ok((demo_graph()?, Some(DEMO_START))),
    }
}
