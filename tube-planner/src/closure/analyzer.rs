//! Segment closure simulation.

use std::collections::HashMap;

use tracing::debug;

use crate::network::{Graph, GraphError};

use super::reachability::{Reachable, reachable_from};

/// Outcome of closing one segment.
#[derive(Debug, Clone)]
pub struct ClosureReport {
    pub from: usize,
    pub to: usize,
    /// `to` is still reachable from `from` by another route.
    pub feasible: bool,
    /// Everything reachable from `from` with the segment closed.
    pub reachable: Reachable,
}

/// Connectivity of one adjacent pair after a line closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOutcome {
    pub from: usize,
    pub to: usize,
    pub connected: bool,
}

/// Outcome of closing every segment along a chain of stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainReport {
    pub pairs: Vec<PairOutcome>,
}

impl ChainReport {
    /// True only if every adjacent pair is still connected.
    pub fn feasible(&self) -> bool {
        self.pairs.iter().all(|pair| pair.connected)
    }

    /// Pairs left without any route.
    pub fn stranded(&self) -> impl Iterator<Item = &PairOutcome> {
        self.pairs.iter().filter(|pair| !pair.connected)
    }
}

/// Simulates closures on copies of a graph.
///
/// The borrowed graph is never modified: every analysis clones it first.
pub struct ClosureAnalyzer<'a> {
    graph: &'a Graph,
}

impl<'a> ClosureAnalyzer<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Close the segment `from -> to` (both directions if undirected) and
    /// check whether `to` can still be reached from `from`.
    pub fn analyze(&self, from: usize, to: usize) -> Result<ClosureReport, GraphError> {
        self.require_edge(from, to)?;

        let mut closed = self.graph.clone();
        closed.delete_edge(from, to)?;

        let reachable = reachable_from(&closed, from)?;
        let feasible = reachable.contains(to);

        debug!(from, to, feasible, reached = reachable.len(), "closure analysed");

        Ok(ClosureReport {
            from,
            to,
            feasible,
            reachable,
        })
    }

    /// Analyse every edge of the graph in turn, each on its own copy.
    pub fn analyze_all(&self) -> Result<Vec<ClosureReport>, GraphError> {
        let edges: Vec<(usize, usize)> = self
            .graph
            .all_edges()
            .map(|edge| (edge.from, edge.to))
            .collect();

        let reports = edges
            .into_iter()
            .map(|(from, to)| self.analyze(from, to))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            closures = reports.len(),
            infeasible = reports.iter().filter(|r| !r.feasible).count(),
            "closure sweep complete"
        );

        Ok(reports)
    }

    /// Close every segment between consecutive stations of `chain` at once,
    /// then check each consecutive pair for a remaining route.
    ///
    /// Every consecutive pair must be an existing edge. A chain of fewer
    /// than two stations closes nothing and is trivially feasible, but its
    /// stations must still exist.
    pub fn analyze_chain(&self, chain: &[usize]) -> Result<ChainReport, GraphError> {
        for &station in chain {
            self.graph.check_vertex(station)?;
        }

        let mut closed = self.graph.clone();
        for pair in chain.windows(2) {
            self.require_edge(pair[0], pair[1])?;
            // A chain may revisit a segment it has already closed
            if closed.has_edge(pair[0], pair[1]) {
                closed.delete_edge(pair[0], pair[1])?;
            }
        }

        let mut searches: HashMap<usize, Reachable> = HashMap::new();
        let mut pairs = Vec::with_capacity(chain.len().saturating_sub(1));
        for pair in chain.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            if !searches.contains_key(&from) {
                searches.insert(from, reachable_from(&closed, from)?);
            }
            pairs.push(PairOutcome {
                from,
                to,
                connected: searches[&from].contains(to),
            });
        }

        let report = ChainReport { pairs };
        debug!(
            stations = chain.len(),
            feasible = report.feasible(),
            "line closure analysed"
        );

        Ok(report)
    }

    fn require_edge(&self, from: usize, to: usize) -> Result<(), GraphError> {
        self.graph.check_vertex(from)?;
        self.graph.check_vertex(to)?;
        if self.graph.has_edge(from, to) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound(from, to))
        }
    }
}

/// Close the segment `from -> to` on a copy of `graph` and report whether
/// the pair stays connected.
pub fn analyze_closure(graph: &Graph, from: usize, to: usize) -> Result<ClosureReport, GraphError> {
    ClosureAnalyzer::new(graph).analyze(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(n: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::new(n, false, true).unwrap();
        for &(u, v) in edges {
            graph.insert_edge(u, v, 1.0).unwrap();
        }
        graph
    }

    #[test]
    fn square_has_alternate_route() {
        // A-B, B-C, C-D, A-D: closing A-B leaves A-D-C-B
        let graph = undirected(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);

        let report = analyze_closure(&graph, 0, 1).unwrap();
        assert!(report.feasible);
        assert_eq!(report.reachable.order(), &[0, 3, 2, 1]);
        assert!(graph.has_edge(0, 1), "original graph must be untouched");
    }

    #[test]
    fn line_has_no_alternate_route() {
        let graph = undirected(3, &[(0, 1), (1, 2)]);

        let report = analyze_closure(&graph, 0, 1).unwrap();
        assert!(!report.feasible);
        assert_eq!(report.reachable.order(), &[0]);
    }

    #[test]
    fn directed_closure_needs_a_forward_route() {
        let mut graph = Graph::new(3, true, true).unwrap();
        graph.insert_edge(0, 1, 1.0).unwrap();
        graph.insert_edge(1, 2, 1.0).unwrap();
        graph.insert_edge(2, 1, 1.0).unwrap();
        graph.insert_edge(1, 0, 1.0).unwrap();

        // Closing 0 -> 1 strands 0 even though 1 -> 0 still runs
        assert!(!analyze_closure(&graph, 0, 1).unwrap().feasible);
        // Closing 1 -> 0 likewise; the reverse segment doesn't help
        assert!(!analyze_closure(&graph, 1, 0).unwrap().feasible);
    }

    #[test]
    fn missing_edge_is_rejected() {
        let graph = undirected(3, &[(0, 1)]);

        assert_eq!(
            analyze_closure(&graph, 1, 2).unwrap_err(),
            GraphError::EdgeNotFound(1, 2)
        );
        assert_eq!(
            analyze_closure(&graph, 0, 7).unwrap_err(),
            GraphError::OutOfRange { vertex: 7, size: 3 }
        );
    }

    #[test]
    fn sweep_covers_every_edge_once() {
        // Triangle 0-1-2 plus a spur 2-3
        let graph = undirected(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);

        let reports = ClosureAnalyzer::new(&graph).analyze_all().unwrap();
        let outcomes: Vec<_> = reports.iter().map(|r| (r.from, r.to, r.feasible)).collect();

        assert_eq!(
            outcomes,
            vec![(0, 1, true), (0, 2, true), (1, 2, true), (2, 3, false)]
        );
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn chain_on_ring_stays_connected_around_the_other_side() {
        // Ring 0-1-2-3-4-5-0; close the 0-1-2 stretch
        let graph = undirected(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);

        let report = ClosureAnalyzer::new(&graph).analyze_chain(&[0, 1, 2]).unwrap();
        assert_eq!(
            report.pairs,
            vec![
                PairOutcome { from: 0, to: 1, connected: false },
                PairOutcome { from: 1, to: 2, connected: false },
            ]
        );
        assert!(!report.feasible());
        assert_eq!(report.stranded().count(), 2);
    }

    #[test]
    fn chain_with_bypass_is_feasible() {
        // Line 0-1-2 with a bypass 0-3-1 and 1-4-2
        let graph = undirected(
            5,
            &[(0, 1), (1, 2), (0, 3), (3, 1), (1, 4), (4, 2)],
        );

        let report = ClosureAnalyzer::new(&graph).analyze_chain(&[0, 1, 2]).unwrap();
        assert!(report.feasible());
        assert_eq!(report.stranded().count(), 0);
    }

    #[test]
    fn chain_may_revisit_a_segment() {
        let graph = undirected(3, &[(0, 1), (1, 2), (0, 2)]);

        let report = ClosureAnalyzer::new(&graph).analyze_chain(&[0, 1, 0]).unwrap();
        assert_eq!(report.pairs.len(), 2);
        assert!(report.feasible());
    }

    #[test]
    fn chain_requires_adjacent_stations() {
        let graph = undirected(3, &[(0, 1)]);

        assert_eq!(
            ClosureAnalyzer::new(&graph).analyze_chain(&[0, 1, 2]),
            Err(GraphError::EdgeNotFound(1, 2))
        );
    }

    #[test]
    fn short_chain_closes_nothing() {
        let graph = undirected(2, &[(0, 1)]);
        let analyzer = ClosureAnalyzer::new(&graph);

        assert!(analyzer.analyze_chain(&[]).unwrap().feasible());
        assert!(analyzer.analyze_chain(&[1]).unwrap().pairs.is_empty());
    }

    #[test]
    fn chain_rejects_unknown_station() {
        let graph = undirected(2, &[(0, 1)]);
        let analyzer = ClosureAnalyzer::new(&graph);

        assert_eq!(
            analyzer.analyze_chain(&[99]),
            Err(GraphError::OutOfRange { vertex: 99, size: 2 })
        );
        assert_eq!(
            analyzer.analyze_chain(&[0, 1, 5]),
            Err(GraphError::OutOfRange { vertex: 5, size: 2 })
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Reference: breadth-first search that simply skips the closed edge.
    fn connected_without(graph: &Graph, from: usize, to: usize) -> bool {
        let mut seen = vec![false; graph.vertex_count()];
        let mut queue = std::collections::VecDeque::from([from]);
        seen[from] = true;
        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.adjacency(u).unwrap() {
                let closed = (u, v) == (from, to) || (!graph.is_directed() && (u, v) == (to, from));
                if !closed && !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        seen[to]
    }

    proptest! {
        /// Feasibility agrees with brute-force reachability
        #[test]
        fn feasibility_matches_reference(
            directed in any::<bool>(),
            edges in prop::collection::vec((0usize..6, 0usize..6), 1..15),
        ) {
            let mut graph = Graph::new(6, directed, true).unwrap();
            for (u, v) in &edges {
                if !graph.has_edge(*u, *v) {
                    graph.insert_edge(*u, *v, 1.0).unwrap();
                }
            }

            for report in ClosureAnalyzer::new(&graph).analyze_all().unwrap() {
                prop_assert_eq!(
                    report.feasible,
                    report.from == report.to || connected_without(&graph, report.from, report.to)
                );
            }
        }
    }
}
