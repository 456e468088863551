use crate::cds::{BranchAndReduce, Combinator, PartialSolution, SearchStatistics};
use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, BitGraph};
use crate::validation::verify;
#[cfg(feature = "log")]
use log::{info, warn};

#[cfg(feature = "handle-ctrlc")]
use crate::signals::received_ctrl_c;

/// Computes a small connected dominating set of a whole graph by running the branch-and-reduce
/// search from every edge and keeping the smallest result.
pub struct Solver {
    combinator: Combinator,
    apply_reductions: bool,
    statistics: SearchStatistics,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            combinator: Combinator::default(),
            apply_reductions: true,
            statistics: SearchStatistics::default(),
        }
    }
}

impl Solver {
    pub fn default_exhaustive() -> Self {
        Self::default().combinator(Combinator::Smallest)
    }

    impl_setter!(self, combinator, Combinator);
    impl_setter!(self, apply_reductions, bool);

    /// Totals over every seed of the last call to `solve`.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns `None` if the graph has no connected dominating set, i.e. it is disconnected.
    pub fn solve(&mut self, graph: &BitGraph) -> Option<BitSet> {
        #[cfg(feature = "log")]
        let start = std::time::Instant::now();
        self.statistics = SearchStatistics::default();
        #[cfg(feature = "log")]
        info!(
            "attempting to solve graph with {} vertices and {} edges",
            graph.order(),
            graph.size()
        );
        if graph.order() == 0 {
            return Some(BitSet::new(0));
        }
        if let Some(v) = graph.vertices().find(|v| graph.degree(*v) + 1 == graph.order()) {
            #[cfg(feature = "log")]
            info!("vertex {} dominates the graph on its own", v);
            return Some(BitSet::from_slice(graph.order(), &[v]));
        }

        let mut best: Option<BitSet> = None;
        for (u, v) in graph.edges() {
            if self.interrupted() {
                #[cfg(feature = "log")]
                warn!("interrupted, reporting best solution found so far");
                break;
            }
            let seed = PartialSolution::from_seed(graph.order(), &[u, v], &[]);
            let mut search = BranchAndReduce::new(graph)
                .combinator(self.combinator)
                .apply_reductions(self.apply_reductions);
            let result = search.solve(seed);
            self.collect(search.statistics());

            if let Some(found) = result {
                if let Err(_error) = verify(graph, &found) {
                    #[cfg(feature = "log")]
                    warn!("seed ({}, {}) produced an invalid set: {}", u, v, _error);
                    continue;
                }
                if best
                    .as_ref()
                    .map_or(true, |b| found.cardinality() < b.cardinality())
                {
                    #[cfg(feature = "log")]
                    info!(
                        "seed ({}, {}) improved solution to {} vertices",
                        u,
                        v,
                        found.cardinality()
                    );
                    best = Some(found);
                }
            }
            // without a universal vertex nothing beats a single edge
            if best.as_ref().map_or(false, |b| b.cardinality() == 2) {
                break;
            }
        }
        #[cfg(feature = "log")]
        info!(
            "search finished after {} nodes in {:?}, best solution has {:?} vertices",
            self.statistics.nodes,
            start.elapsed(),
            best.as_ref().map(|b| b.cardinality())
        );
        best
    }

    fn collect(&mut self, statistics: &SearchStatistics) {
        let total = &mut self.statistics;
        total.nodes += statistics.nodes;
        total.infeasible += statistics.infeasible;
        total.solutions += statistics.solutions;
        total.max_depth = total.max_depth.max(statistics.max_depth);
        total.forced += statistics.forced;
        total.dominated += statistics.dominated;
        total.useless += statistics.useless;
        for (rule, count) in statistics.branchings.iter() {
            *total.branchings.entry(*rule).or_insert(0) += count;
        }
    }

    fn interrupted(&self) -> bool {
        #[cfg(feature = "handle-ctrlc")]
        if received_ctrl_c() {
            return true;
        }
        #[cfg(feature = "cli")]
        if crate::timeout::timeout() {
            return true;
        }
        false
    }
}
