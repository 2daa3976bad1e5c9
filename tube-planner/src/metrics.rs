//! All-pairs journey samples, built by repeating single-source queries.
//!
//! The samples are raw: summarising them (histograms, averages) belongs to
//! the caller, see [`crate::report`].

use tracing::debug;

use crate::network::Graph;
use crate::paths::{Algorithm, PathError};

/// Shortest journey between one ordered pair of distinct, connected stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JourneySample {
    pub source: usize,
    pub target: usize,
    /// Shortest distance from `source` to `target`.
    pub duration: f64,
    /// Edges travelled along the reconstructed shortest path.
    pub stops: usize,
}

/// One sample per reachable ordered pair `(s, t)` with `s != t`.
///
/// Runs `algorithm` once from every vertex. Unreachable pairs are left out.
/// Samples are ordered by source, then target.
pub fn aggregate(graph: &Graph, algorithm: Algorithm) -> Result<Vec<JourneySample>, PathError> {
    let n = graph.vertex_count();
    let mut samples = Vec::new();

    for source in 0..n {
        let tree = algorithm.run(graph, source)?;
        for target in (0..n).filter(|&t| t != source) {
            if let Some(path) = tree.path_to(target)? {
                samples.push(JourneySample {
                    source,
                    target,
                    duration: tree.distances()[target],
                    stops: path.hops(),
                });
            }
        }
    }

    debug!(
        vertices = n,
        samples = samples.len(),
        %algorithm,
        "journey samples collected"
    );

    Ok(samples)
}

/// Durations of every sample, in order.
pub fn durations(samples: &[JourneySample]) -> impl Iterator<Item = f64> + '_ {
    samples.iter().map(|s| s.duration)
}

/// Stop counts of every sample, in order.
pub fn stops(samples: &[JourneySample]) -> impl Iterator<Item = usize> + '_ {
    samples.iter().map(|s| s.stops)
}

/// Journey samples with and without one segment.
#[derive(Debug, Clone)]
pub struct ClosureImpact {
    pub before: Vec<JourneySample>,
    pub after: Vec<JourneySample>,
}

impl ClosureImpact {
    /// Ordered pairs connected before the closure but not after.
    pub fn disconnected_pairs(&self) -> usize {
        self.before.len() - self.after.len()
    }
}

/// Aggregate samples on `graph` and on a copy with `from -> to` closed.
pub fn closure_impact(
    graph: &Graph,
    from: usize,
    to: usize,
    algorithm: Algorithm,
) -> Result<ClosureImpact, PathError> {
    let mut closed = graph.clone();
    closed.delete_edge(from, to)?;

    Ok(ClosureImpact {
        before: aggregate(graph, algorithm)?,
        after: aggregate(&closed, algorithm)?,
    })
}
