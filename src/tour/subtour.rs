use crate::{
    error::{Result, TourError},
    graph::VertexId,
};

/// A closed walk discovered by one growth pass: `path` starts and ends at
/// `origin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subtour {
    pub origin: VertexId,
    pub path: Vec<VertexId>,
}

/// Splice a sub-tour into the main tour.
///
/// An empty tour is replaced by the sub-tour's path. Otherwise the first
/// occurrence of the origin is replaced by the whole path; since the path
/// begins and ends at the origin the result is still one closed walk. The
/// same rule applies at the first, last and interior positions.
pub fn splice(tour: &mut Vec<VertexId>, subtour: Subtour) -> Result<()> {
    if tour.is_empty() {
        *tour = subtour.path;
        return Ok(());
    }

    let at = tour.iter().position(|&v| v == subtour.origin)
        .ok_or(TourError::SpliceIndexNotFound(subtour.origin))?;
    let _ = tour.splice(at..=at, subtour.path);

    Ok(())
}
