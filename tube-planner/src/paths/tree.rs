//! Shortest-path trees and path reconstruction.

use crate::network::{Graph, GraphError};

use super::error::PathError;

/// Result of a single-source shortest-path query.
///
/// `distances()[v]` is the shortest known distance from the source, or
/// `f64::INFINITY` if `v` is unreachable. `predecessors()[v]` is the vertex
/// before `v` on a shortest path, or `None` for the source and unreached
/// vertices. Whenever `pred[v] == Some(u)`, `dist[v] == dist[u] + weight(u, v)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    pub(super) dist: Vec<f64>,
    pub(super) pred: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Initial tables: every vertex unreached except the source at 0.
    pub(super) fn unsettled(source: usize, n: usize) -> Self {
        let mut dist = vec![f64::INFINITY; n];
        dist[source] = 0.0;

        Self {
            source,
            dist,
            pred: vec![None; n],
        }
    }

    /// The query's source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance table, indexed by vertex.
    pub fn distances(&self) -> &[f64] {
        &self.dist
    }

    /// Predecessor table, indexed by vertex.
    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.pred
    }

    /// Shortest distance to `target`, or `None` if it is unreachable or
    /// out of range.
    pub fn distance(&self, target: usize) -> Option<f64> {
        self.dist.get(target).copied().filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    pub fn predecessor(&self, target: usize) -> Option<usize> {
        self.pred.get(target).copied().flatten()
    }

    /// Reconstruct the path from the source to `target`.
    ///
    /// Returns `Ok(None)` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Result<Option<Path>, PathError> {
        reconstruct(&self.pred, &self.dist, self.source, target)
    }
}

/// A source-to-target vertex sequence, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<usize> {
        self.vertices
    }

    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    pub fn target(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Sum of edge weights along the path in `graph`, or `None` if some
    /// consecutive pair is not an edge of `graph`.
    pub fn total_weight(&self, graph: &Graph) -> Option<f64> {
        self.vertices
            .windows(2)
            .map(|pair| graph.weight(pair[0], pair[1]))
            .sum()
    }
}

/// Walk a predecessor table back from `target` to `source`.
///
/// The distance table decides reachability first and the walk must agree
/// with it: a finite distance whose chain does not end at `source`, or an
/// infinite one whose chain does, is reported as
/// [`PathError::InconsistentTree`]. The walk is bounded by the vertex count
/// and fails with [`PathError::PredecessorCycle`] past that.
pub fn reconstruct(
    pred: &[Option<usize>],
    dist: &[f64],
    source: usize,
    target: usize,
) -> Result<Option<Path>, PathError> {
    let size = pred.len();
    for vertex in [source, target] {
        if vertex >= size {
            return Err(GraphError::OutOfRange { vertex, size }.into());
        }
    }

    let reachable = dist
        .get(target)
        .ok_or(PathError::InconsistentTree { target })?
        .is_finite();

    let mut vertices = vec![target];
    let mut current = target;
    while let Some(previous) = pred[current] {
        if vertices.len() > size {
            return Err(PathError::PredecessorCycle { target });
        }
        vertices.push(previous);
        current = previous;
    }

    let reached = current == source;
    if reached != reachable {
        return Err(PathError::InconsistentTree { target });
    }
    if !reached {
        return Ok(None);
    }

    vertices.reverse();
    Ok(Some(Path { vertices }))
}
