//! Bellman-Ford for graphs that may carry negative weights.

use tracing::{debug, trace};

use crate::network::{Edge, Graph};

use super::error::PathError;
use super::tree::ShortestPaths;

/// Single-source shortest paths tolerant of negative edge weights.
///
/// Relaxes every edge up to `n - 1` times, stopping early once a pass
/// changes nothing, then makes one more check pass: if any edge still
/// relaxes, a negative cycle is reachable from `source` and the call fails
/// with [`PathError::NegativeCycle`]. On non-negative graphs the distances
/// match [`dijkstra`](super::dijkstra) at O(V·E) cost.
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<ShortestPaths, PathError> {
    graph.check_vertex(source)?;

    let n = graph.vertex_count();
    let arcs: Vec<Edge> = graph.arcs().collect();
    let mut tree = ShortestPaths::unsettled(source, n);

    let mut passes = 0usize;
    for _ in 1..n {
        passes += 1;
        let changed = relax_pass(&arcs, &mut tree);
        trace!(source, pass = passes, changed, "bellman-ford pass");
        if !changed {
            break;
        }
    }

    if let Some(edge) = arcs.iter().find(|edge| relaxes(edge, &tree)) {
        debug!(
            source,
            from = edge.from,
            to = edge.to,
            "negative cycle detected"
        );
        return Err(PathError::NegativeCycle { start: source });
    }

    debug!(source, passes, "bellman-ford complete");

    Ok(tree)
}

/// Whether `edge` would shorten the current distance to its head.
fn relaxes(edge: &Edge, tree: &ShortestPaths) -> bool {
    let from = tree.dist[edge.from];
    from.is_finite() && from + edge.weight < tree.dist[edge.to]
}

/// Relax every arc once. Returns true if any distance changed.
fn relax_pass(arcs: &[Edge], tree: &mut ShortestPaths) -> bool {
    let mut changed = false;
    for edge in arcs {
        if relaxes(edge, tree) {
            tree.dist[edge.to] = tree.dist[edge.from] + edge.weight;
            tree.pred[edge.to] = Some(edge.from);
            changed = true;
        }
    }
    changed
}
