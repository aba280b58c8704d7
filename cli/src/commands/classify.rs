use anyhow::Result;
use eulertour::{classify, odd_degree_count};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::GraphArgs) -> Result<()> {
    let (graph, _) = super::load_graph(args)?;

    for vertex in graph.vertices() {
        println!("{}'s degree: {}", vertex.name(), vertex.degree());
    }

    let classification = classify(graph.vertices());
    println!("odd-degree vertices: {}", odd_degree_count(graph.vertices()));
    println!("eulerian trail: {}", classification.trail);
    println!("eulerian cycle: {}", classification.cycle);

    Ok(())
}
