use crate::cds::{Branch, BranchRule, Classifier, PartialSolution, Reducer};
use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, BitGraph};
use fxhash::FxHashMap;
use std::cmp::max;

#[cfg(feature = "log")]
use log::{debug, trace};

/// How the results of sibling sub-problems are combined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Return the first child that yields a solution.
    FirstFeasible,
    /// Search every child and keep the smallest solution among them.
    Smallest,
}

impl Default for Combinator {
    fn default() -> Self {
        Self::FirstFeasible
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchStatistics {
    pub nodes: usize,
    pub infeasible: usize,
    pub solutions: usize,
    pub max_depth: usize,
    pub forced: usize,
    pub dominated: usize,
    pub useless: usize,
    pub branchings: FxHashMap<BranchRule, usize>,
}

impl SearchStatistics {
    pub fn branchings_by(&self, rule: BranchRule) -> usize {
        self.branchings.get(&rule).copied().unwrap_or(0)
    }
}

/// Exact branch-and-reduce search for a connected dominating set extending a seed.
pub struct BranchAndReduce<'a> {
    classifier: Classifier<'a>,
    combinator: Combinator,
    apply_reductions: bool,
    statistics: SearchStatistics,
}

impl<'a> BranchAndReduce<'a> {
    pub fn new(graph: &'a BitGraph) -> Self {
        Self {
            classifier: Classifier::new(graph),
            combinator: Combinator::default(),
            apply_reductions: true,
            statistics: SearchStatistics::default(),
        }
    }

    impl_setter!(self, combinator, Combinator);
    impl_setter!(self, apply_reductions, bool);

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Completes `seed` to a connected dominating set, or returns `None` if no completion
    /// exists. The selected vertices of the seed have to induce a connected subgraph.
    pub fn solve(&mut self, seed: PartialSolution) -> Option<BitSet> {
        assert_eq!(seed.order(), self.classifier.graph().order());
        let result = self.search(seed, 0);
        #[cfg(feature = "log")]
        debug!(
            "search visited {} nodes, found {:?} vertices",
            self.statistics.nodes,
            result.as_ref().map(|s| s.cardinality())
        );
        result
    }

    fn search(&mut self, state: PartialSolution, depth: usize) -> Option<BitSet> {
        self.statistics.nodes += 1;
        self.statistics.max_depth = max(self.statistics.max_depth, depth);

        if self.classifier.is_infeasible(&state) {
            self.statistics.infeasible += 1;
            return None;
        }
        if self.classifier.is_solved(&state) {
            self.statistics.solutions += 1;
            return Some(state.into_selected());
        }

        let state = if self.apply_reductions {
            let mut reducer = Reducer::new(self.classifier, state);
            reducer.reduce();
            self.statistics.forced += reducer.summary.forced;
            self.statistics.dominated += reducer.summary.dominated;
            self.statistics.useless += reducer.summary.useless;
            let state = reducer.into_state();
            if self.classifier.is_infeasible(&state) {
                self.statistics.infeasible += 1;
                return None;
            }
            if self.classifier.is_solved(&state) {
                self.statistics.solutions += 1;
                return Some(state.into_selected());
            }
            state
        } else {
            state
        };

        let branch = match Branch::select(&self.classifier, &state) {
            Some(branch) => branch,
            None => {
                self.statistics.infeasible += 1;
                return None;
            }
        };
        *self.statistics.branchings.entry(branch.rule()).or_insert(0) += 1;
        #[cfg(feature = "log")]
        trace!("depth {}: branching with {:?}", depth, branch);

        let children = branch.children(&self.classifier, &state);
        match self.combinator {
            Combinator::FirstFeasible => children
                .into_iter()
                .find_map(|child| self.search(child, depth + 1)),
            Combinator::Smallest => {
                let mut best: Option<BitSet> = None;
                for child in children {
                    if let Some(found) = self.search(child, depth + 1) {
                        if best
                            .as_ref()
                            .map_or(true, |b| found.cardinality() < b.cardinality())
                        {
                            best = Some(found);
                        }
                    }
                }
                best
            }
        }
    }
}

/// Completes the seed `(selected, discarded)` to a connected dominating set with the default
/// configuration.
pub fn connected_dominating_set(
    graph: &BitGraph,
    selected: &BitSet,
    discarded: &BitSet,
) -> Option<BitSet> {
    BranchAndReduce::new(graph).solve(PartialSolution::new(selected.clone(), discarded.clone()))
}
