use serde::Serialize;

use crate::graph::Vertex;

/// Which Eulerian walks a graph admits, judged by vertex degree alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub trail: bool,
    pub cycle: bool,
}

/// Count vertices whose authored degree is odd.
pub fn odd_degree_count(vertices: &[Vertex]) -> usize {
    vertices.iter().filter(|v| v.degree() % 2 != 0).count()
}

/// Classify a vertex list by its odd-degree count.
///
/// - 0 odd vertices: circuit (and therefore trail)
/// - 2 odd vertices: trail only
/// - anything else: neither
///
/// Degree is the length of each authored neighbor list; it is not
/// cross-checked against the deduplicated edge set.
pub fn classify(vertices: &[Vertex]) -> Classification {
    match odd_degree_count(vertices) {
        0 => Classification { trail: true, cycle: true },
        2 => Classification { trail: true, cycle: false },
        _ => Classification { trail: false, cycle: false },
    }
}
