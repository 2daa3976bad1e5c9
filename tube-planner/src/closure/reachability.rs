//! Depth-first reachability over an explicit stack.

use crate::network::{Graph, GraphError};

/// Vertices reachable from a start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reachable {
    visited: Vec<bool>,
    order: Vec<usize>,
}

impl Reachable {
    /// Whether `vertex` was reached. Out-of-range vertices never are.
    pub fn contains(&self, vertex: usize) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Reached vertices in depth-first discovery order, start first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Every vertex reachable from `start`, including `start` itself.
///
/// Discovery order matches a recursive depth-first search that visits
/// neighbors in stored order. Each vertex is expanded at most once, so the
/// search is O(V + E) on any graph, cyclic or not.
pub fn reachable_from(graph: &Graph, start: usize) -> Result<Reachable, GraphError> {
    graph.check_vertex(start)?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        order.push(vertex);

        // Reversed so the first stored neighbor is explored first
        stack.extend(
            graph
                .neighbors(vertex)
                .iter()
                .rev()
                .map(|&(next, _)| next)
                .filter(|&next| !visited[next]),
        );
    }

    Ok(Reachable { visited, order })
}
