use anyhow::{Context, Result};
use eulertour::{Category, EdgeKey, Graph, Outcome, Progress, Tour, TourConfig, TracingProgress, VertexId, calculate};
use serde_json::json;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::TourArgs) -> Result<()> {
    let (graph, suggested) = super::load_graph(&args.input)?;
    let start = args.start.map(VertexId)
        .or(suggested)
        .or_else(|| graph.vertices().first().map(|v| v.id()))
        .context("graph has no vertices to start from")?;

    let config = TourConfig { start, seed: args.seed, max_steps: args.max_steps };
    let mut progress = TracingProgress;
    let outcome = calculate(&graph, &config, &mut progress)?;

    if args.json {
        let report = match &outcome {
            Outcome::Circuit(tour) => json!({
                "outcome": &outcome,
                "labels": tour.labels(&graph),
                "distance": tour.distance(&graph),
            }),
            Outcome::NoCircuit(_) => json!({ "outcome": &outcome }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &outcome {
        Outcome::Circuit(tour) => print_legs(&graph, tour, &mut progress),
        Outcome::NoCircuit(rejection) => {
            println!("no eulerian circuit: {} vertices have odd degree", rejection.odd);
            if rejection.classification.trail { println!("(an eulerian trail exists, but only circuits are constructed)") }
        }
    }

    Ok(())
}

/// Hand the tour to the terminal one leg at a time.
fn print_legs(graph: &Graph, tour: &Tour, progress: &mut impl Progress) {
    for (i, (a, b)) in tour.legs().enumerate() {
        let length = graph.find_edge(EdgeKey::new(a, b)).map_or(0.0, |e| graph.edge(e).distance());
        println!("{:>3}. {} -> {}  ({:.0})", i + 1, graph.label(a), graph.label(b), length);
    }
    println!("total distance: {:.0}", tour.distance(graph));

    progress.report(Category::Algorithm, format!("{} established.", tour.labels(graph)));
    println!("{}", tour.labels(graph));
}
