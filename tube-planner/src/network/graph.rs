//! Adjacency-list graph over dense vertex indices.

use tracing::trace;

use super::error::GraphError;

/// Largest vertex count a [`Graph`] accepts.
///
/// Every vertex owns an adjacency list, so an empty graph at this size
/// already takes a few hundred megabytes.
pub const MAX_VERTICES: usize = 1 << 24;

/// A stored edge, as reported by [`Graph::all_edges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    /// Travel time in minutes.
    pub weight: f64,
}

/// A weighted graph with a fixed number of vertices.
///
/// Each vertex owns an ordered list of outgoing `(neighbor, weight)` pairs.
/// In the undirected configuration every edge is stored in both endpoint
/// lists, so `has_edge(u, v) == has_edge(v, u)` always holds.
///
/// At most one edge exists per ordered pair. Inserting a second one fails
/// with [`GraphError::DuplicateEdge`]; callers loading raw data are expected
/// to check [`Graph::has_edge`] first.
///
/// `Clone` is a deep copy: closures are simulated on a clone and never touch
/// the original.
///
/// # Examples
///
/// ```
/// use tube_planner::network::Graph;
///
/// let mut graph = Graph::new(3, false, true).unwrap();
/// graph.insert_edge(0, 1, 4.0).unwrap();
///
/// assert!(graph.has_edge(1, 0));
/// assert!(!graph.has_edge(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, f64)>>,
    directed: bool,
    weighted: bool,
    allow_negative: bool,
}

impl Graph {
    /// Create an empty graph over `n` vertices.
    ///
    /// When `weighted` is false every inserted edge is stored with weight 1,
    /// whatever weight the caller passes.
    pub fn new(n: usize, directed: bool, weighted: bool) -> Result<Self, GraphError> {
        if n > MAX_VERTICES {
            return Err(GraphError::InvalidSize(n));
        }

        Ok(Self {
            adjacency: vec![Vec::new(); n],
            directed,
            weighted,
            allow_negative: false,
        })
    }

    /// Accept negative edge weights from now on.
    ///
    /// Only Bellman-Ford gives meaningful results on such a graph.
    pub fn allow_negative_weights(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored edges, counting each undirected edge once.
    pub fn edge_count(&self) -> usize {
        self.all_edges().count()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns true if any stored edge has a negative weight.
    pub fn has_negative_weights(&self) -> bool {
        self.arcs().any(|edge| edge.weight < 0.0)
    }

    /// Check that `vertex` lies in `[0, n)`.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                size: self.adjacency.len(),
            })
        }
    }

    /// Insert an edge from `u` to `v`.
    ///
    /// In an undirected graph `v -> u` becomes traversable with the same
    /// weight.
    pub fn insert_edge(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if !weight.is_finite() || (weight < 0.0 && !self.allow_negative) {
            return Err(GraphError::InvalidWeight(weight));
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        let weight = if self.weighted { weight } else { 1.0 };

        self.adjacency[u].push((v, weight));
        if !self.directed && u != v {
            self.adjacency[v].push((u, weight));
        }

        trace!(u, v, weight, "edge inserted");
        Ok(())
    }

    /// Returns true if an edge from `u` to `v` exists.
    ///
    /// Out-of-range vertices have no edges.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Weight of the edge from `u` to `v`, if it exists.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adjacency
            .get(u)?
            .iter()
            .find(|(neighbor, _)| *neighbor == v)
            .map(|(_, weight)| *weight)
    }

    /// Remove the edge from `u` to `v`, and its mirror if undirected.
    pub fn delete_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let pos = self.adjacency[u]
            .iter()
            .position(|(neighbor, _)| *neighbor == v)
            .ok_or(GraphError::EdgeNotFound(u, v))?;
        self.adjacency[u].remove(pos);

        if !self.directed
            && u != v
            && let Some(mirror) = self.adjacency[v].iter().position(|(n, _)| *n == u)
        {
            self.adjacency[v].remove(mirror);
        }

        trace!(u, v, "edge deleted");
        Ok(())
    }

    /// Outgoing `(neighbor, weight)` pairs of `u`, in stored order.
    ///
    /// The returned iterator is `Clone`, so it can be restarted.
    pub fn adjacency(
        &self,
        u: usize,
    ) -> Result<impl Iterator<Item = (usize, f64)> + Clone + '_, GraphError> {
        self.check_vertex(u)?;
        Ok(self.adjacency[u].iter().copied())
    }

    /// Outgoing pairs of a vertex already known to be in range.
    pub(crate) fn neighbors(&self, u: usize) -> &[(usize, f64)] {
        &self.adjacency[u]
    }

    /// Every stored edge. Each undirected edge is reported once, from its
    /// lower-indexed endpoint.
    pub fn all_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.directed;
        self.arcs().filter(move |edge| directed || edge.from <= edge.to)
    }

    /// Every traversable direction of every edge.
    ///
    /// Identical to [`all_edges`](Self::all_edges) for directed graphs; for
    /// undirected graphs each edge appears once per direction.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, list)| {
            list.iter().map(move |&(to, weight)| Edge { from, to, weight })
        })
    }

    /// Independent copy with every weight set to 1, for fewest-stops queries.
    pub fn to_unweighted(&self) -> Graph {
        let adjacency = self
            .adjacency
            .iter()
            .map(|list| list.iter().map(|&(to, _)| (to, 1.0)).collect())
            .collect();

        Graph {
            adjacency,
            directed: self.directed,
            weighted: false,
            allow_negative: false,
        }
    }
}
