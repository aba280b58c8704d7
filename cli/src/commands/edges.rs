use anyhow::Result;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::GraphArgs) -> Result<()> {
    let (graph, _) = super::load_graph(args)?;

    for edge in graph.edges() {
        let midpoint = edge.midpoint();
        println!(
            "{:<7} {}-{}  length {:>7.1}  midpoint ({:.1}, {:.1})",
            edge.key().to_string(),
            graph.label(edge.low()),
            graph.label(edge.high()),
            edge.distance(),
            midpoint.x(),
            midpoint.y(),
        );
    }

    tracing::info!(vertices = graph.vertex_count(), edges = graph.edge_count(), "edge set listed");

    Ok(())
}
