use ahash::AHashSet;

use crate::{
    error::{Result, TourError},
    graph::{Graph, VertexId},
    progress::{Category, Progress},
    tour::{Chooser, Subtour, Tour, splice},
};

/// Randomized Hierholzer construction over one graph.
///
/// Owns all mutable state of a run: the per-edge visited flags and the
/// accumulating main tour. Nothing outside this value touches them.
#[derive(Debug)]
pub struct Hierholzer<'g, C: Chooser> {
    graph: &'g Graph,
    chooser: C,
    start: VertexId,
    visited: Vec<bool>,   // visited[e] is set once, when edge e is walked
    tour: Vec<VertexId>,  // main tour, empty until the first sub-tour closes
    max_steps: usize,     // bound on one growth pass
}

impl<'g, C: Chooser> Hierholzer<'g, C> {
    /// Prepare a run starting from `start`, which must exist and have at
    /// least one incident edge.
    pub fn new(graph: &'g Graph, start: VertexId, chooser: C) -> Result<Self> {
        if !graph.contains(start) { return Err(TourError::UnknownVertex(start)) }
        if graph.incident_edges(start).is_empty() { return Err(TourError::IsolatedStart(start)) }

        Ok(Self {
            graph,
            chooser,
            start,
            visited: vec![false; graph.edge_count()],
            tour: Vec::new(),
            max_steps: graph.edge_count(),
        })
    }

    /// Override the bound on steps per growth pass (default: edge count).
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Visited flag for every edge, indexed like [`Graph::edges`].
    #[inline] pub fn visited(&self) -> &[bool] { &self.visited }

    /// The main tour built so far.
    #[inline] pub fn tour(&self) -> &[VertexId] { &self.tour }

    /// Filter `candidates` (default: every edge) to those not yet walked.
    pub fn unvisited(&self, candidates: Option<&[usize]>) -> Vec<usize> {
        match candidates {
            Some(edges) => edges.iter().copied().filter(|&e| !self.visited[e]).collect(),
            None => (0..self.visited.len()).filter(|&e| !self.visited[e]).collect(),
        }
    }

    /// Returns true if `vertex` still has an unvisited incident edge.
    fn has_unvisited(&self, vertex: VertexId) -> bool {
        self.graph.incident_edges(vertex).iter().any(|&e| !self.visited[e])
    }

    /// Choose where the next sub-tour begins.
    ///
    /// The first pass uses the configured start. Later passes pick uniformly
    /// among distinct tour vertices that still have unvisited edges, since
    /// only those can be spliced back in.
    pub fn select_start(&mut self) -> Result<VertexId> {
        if self.tour.is_empty() { return Ok(self.start) }

        let mut seen = AHashSet::new();
        let eligible = self.tour.iter().copied()
            .filter(|&v| seen.insert(v) && self.has_unvisited(v))
            .collect::<Vec<_>>();

        self.chooser.choose(&eligible).copied()
            .ok_or_else(|| TourError::UnreachableEdges { remaining: self.unvisited(None).len() })
    }

    /// Walk random unvisited edges from `origin` until the walk returns to it.
    pub fn grow(&mut self, origin: VertexId, progress: &mut impl Progress) -> Result<Subtour> {
        progress.report(Category::Subtour, format!("Starting new subtour with node {}", self.graph.label(origin)));

        let mut path = vec![origin];
        let mut current = origin;

        loop {
            let eligible = self.unvisited(Some(self.graph.incident_edges(current)));
            let steps = path.len() - 1;
            let divergence = TourError::ConstructionDivergence { origin, at: current, steps };
            if steps >= self.max_steps { return Err(divergence) }
            let Some(&edge) = self.chooser.choose(&eligible) else { return Err(divergence) };

            self.visited[edge] = true;
            current = self.graph.other_end(edge, current);
            path.push(current);

            if current == origin { break }
        }

        let name = path.iter().map(|&v| self.graph.label(v)).collect::<String>();
        progress.report(Category::Subtour, format!("Established {name}"));

        Ok(Subtour { origin, path })
    }

    /// Run to completion and return the closed walk.
    ///
    /// Each pass selects a start, grows one sub-tour and splices it into the
    /// main tour, until no unvisited edge remains. Every pass walks at least
    /// one new edge, so the loop is bounded by the edge count.
    pub fn run(&mut self, progress: &mut impl Progress) -> Result<Tour> {
        progress.report(Category::Algorithm, "Running Hierholzer's algorithm...".to_string());

        loop {
            let origin = self.select_start()?;
            let subtour = self.grow(origin, progress)?;
            splice(&mut self.tour, subtour)?;

            if !self.visited.contains(&false) { break }
        }

        tracing::debug!(len = self.tour.len(), edges = self.graph.edge_count(), "tour complete");
        Ok(Tour::from(self.tour.clone()))
    }
}
