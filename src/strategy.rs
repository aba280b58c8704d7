use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TourError},
    eulerian::{Classification, classify, odd_degree_count},
    graph::{Graph, VertexId},
    progress::{Category, Progress},
    tour::{Chooser, Hierholzer, Tour, Uniform},
};

/// Where a [`Strategy`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Classifying,
    Rejected,
    Constructing,
    Complete,
}

/// Why no circuit was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub classification: Classification,
    pub odd: usize,
}

/// Result of a strategy run: a circuit, or the classification that ruled
/// one out.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Circuit(Tour),
    NoCircuit(Rejection),
}

impl Outcome {
    #[inline]
    pub fn tour(&self) -> Option<&Tour> {
        match self { Outcome::Circuit(tour) => Some(tour), Outcome::NoCircuit(_) => None }
    }

    /// Treat a rejected graph as an error.
    pub fn into_tour(self) -> Result<Tour> {
        match self {
            Outcome::Circuit(tour) => Ok(tour),
            Outcome::NoCircuit(rejection) => Err(TourError::NoEulerianCircuit { odd: rejection.odd }),
        }
    }
}

/// Parameters of one tour calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourConfig {
    /// Vertex the first sub-tour starts from.
    pub start: VertexId,
    /// Seed for reproducible choices; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Cap on steps per growth pass; the edge count when absent.
    #[serde(default)]
    pub max_steps: Option<usize>,
}

impl TourConfig {
    pub fn new(start: VertexId) -> Self {
        Self { start, seed: None, max_steps: None }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Classify a graph and, if it admits a circuit, construct one.
///
/// Walks `Idle -> Classifying -> (Rejected | Constructing) -> Complete`.
/// A fatal construction error leaves the phase at `Constructing`.
#[derive(Debug)]
pub struct Strategy<'g> {
    graph: &'g Graph,
    start: VertexId,
    max_steps: Option<usize>,
    phase: Phase,
}

impl<'g> Strategy<'g> {
    pub fn new(graph: &'g Graph, start: VertexId) -> Self {
        Self { graph, start, max_steps: None, phase: Phase::Idle }
    }

    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[inline] pub fn phase(&self) -> Phase { self.phase }

    pub fn run<C: Chooser>(&mut self, chooser: C, progress: &mut impl Progress) -> Result<Outcome> {
        progress.report(Category::Strategy, "Starting strategy...".to_string());

        self.phase = Phase::Classifying;
        let vertices = self.graph.vertices();
        for vertex in vertices {
            progress.report(Category::Info, format!("{}'s degree: {}", vertex.name(), vertex.degree()));
        }
        let classification = classify(vertices);

        if !classification.cycle {
            self.phase = Phase::Rejected;
            progress.report(Category::Info, "This graph has no eulerian cycle.".to_string());
            return Ok(Outcome::NoCircuit(Rejection { classification, odd: odd_degree_count(vertices) }));
        }
        progress.report(Category::Info, "This graph has an eulerian cycle.".to_string());

        self.phase = Phase::Constructing;
        let mut engine = Hierholzer::new(self.graph, self.start, chooser)?;
        if let Some(max_steps) = self.max_steps { engine = engine.with_max_steps(max_steps) }
        let tour = engine.run(progress)?;

        self.phase = Phase::Complete;
        progress.report(Category::Strategy, "Strategy calculated.".to_string());

        Ok(Outcome::Circuit(tour))
    }
}

/// Run a full strategy with uniform random choices.
pub fn calculate(graph: &Graph, config: &TourConfig, progress: &mut impl Progress) -> Result<Outcome> {
    let chooser = match config.seed {
        Some(seed) => Uniform::seeded(seed),
        None => Uniform::from_entropy(),
    };

    Strategy::new(graph, config.start)
        .with_max_steps(config.max_steps)
        .run(chooser, progress)
}
