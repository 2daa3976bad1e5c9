//! Dijkstra's algorithm for non-negative edge weights.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::network::Graph;

use super::error::PathError;
use super::tree::ShortestPaths;

/// A tentative distance waiting in the frontier.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: f64,
    vertex: usize,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the cheapest entry,
        // then the lowest vertex index, pops first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths from `source` by priority-queue relaxation.
///
/// Fails with [`PathError::NegativeWeight`] if the graph carries any
/// negative edge; use [`bellman_ford`](super::bellman_ford) there. Ties on
/// equal tentative distances are broken by vertex index, so the result is a
/// pure function of the graph and its insertion order.
pub fn dijkstra(graph: &Graph, source: usize) -> Result<ShortestPaths, PathError> {
    graph.check_vertex(source)?;
    if graph.has_negative_weights() {
        return Err(PathError::NegativeWeight);
    }

    let n = graph.vertex_count();
    let mut tree = ShortestPaths::unsettled(source, n);
    let mut settled = vec![false; n];
    let mut settled_count = 0usize;

    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        cost: 0.0,
        vertex: source,
    });

    while let Some(Frontier { cost, vertex }) = frontier.pop() {
        // Stale entry superseded by a cheaper push
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;
        settled_count += 1;

        for &(next, weight) in graph.neighbors(vertex) {
            if settled[next] {
                continue;
            }
            let candidate = cost + weight;
            if candidate < tree.dist[next] {
                tree.dist[next] = candidate;
                tree.pred[next] = Some(vertex);
                frontier.push(Frontier {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }

    debug!(source, settled = settled_count, "dijkstra complete");

    Ok(tree)
}
