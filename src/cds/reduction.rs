use crate::cds::{Classifier, PartialSolution};
use crate::datastructures::BitSet;
use crate::graph::BaseGraph;
#[cfg(feature = "log")]
use log::trace;

/// Number of vertices each rule moved during one reduction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReductionSummary {
    pub forced: usize,
    pub dominated: usize,
    pub useless: usize,
}

impl ReductionSummary {
    pub fn total(&self) -> usize {
        self.forced + self.dominated + self.useless
    }
}

/// Applies the three reduction rules to a partial solution. None of them removes every
/// connected dominating set that extends the state.
pub struct Reducer<'a> {
    classifier: Classifier<'a>,
    state: PartialSolution,
    pub summary: ReductionSummary,
}

impl<'a> Reducer<'a> {
    pub fn new(classifier: Classifier<'a>, state: PartialSolution) -> Self {
        Self {
            classifier,
            state,
            summary: ReductionSummary::default(),
        }
    }

    pub fn state(&self) -> &PartialSolution {
        &self.state
    }

    pub fn into_state(self) -> PartialSolution {
        self.state
    }

    pub fn reduce(&mut self) {
        let candidates = self.classifier.candidates(&self.state);
        let promises = self.classifier.promises(&self.state);

        self.force_promised_candidates(&candidates, &promises);
        self.discard_dominated_candidates(&candidates, &promises);
        self.discard_useless_vertices();

        #[cfg(feature = "log")]
        trace!(
            "reduction forced {}, discarded {} dominated and {} useless vertices",
            self.summary.forced,
            self.summary.dominated,
            self.summary.useless
        );
    }

    // (a) adjacent to the selection and indispensable
    fn force_promised_candidates(&mut self, candidates: &BitSet, promises: &BitSet) {
        for v in candidates.intersection(promises).iter() {
            self.state.select(v);
            self.summary.forced += 1;
        }
    }

    // (b) x is discarded when some y covers every free neighbor of x
    fn discard_dominated_candidates(&mut self, candidates: &BitSet, promises: &BitSet) {
        let graph = self.classifier.graph();
        let free = self.classifier.free(self.state.selected());
        let pool: Vec<usize> = candidates.difference(promises).iter().collect();

        for &x in pool.iter() {
            let free_of_x = graph.neighborhood_set(x).intersection(&free);
            let witness = pool.iter().copied().find(|&y| {
                y != x
                    && !self.state.is_discarded(y)
                    && free_of_x.is_subset_of(graph.neighborhood_set(y))
            });
            if witness.is_some() {
                self.state.discard(x);
                self.summary.dominated += 1;
            }
        }
    }

    // (c) nothing left to dominate around v
    fn discard_useless_vertices(&mut self) {
        let graph = self.classifier.graph();
        let free = self.classifier.free(self.state.selected());
        for v in self.state.available().iter() {
            if !graph.neighborhood_set(v).intersects_with(&free) {
                self.state.discard(v);
                self.summary.useless += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cds::{Classifier, PartialSolution, Reducer};
    use crate::graph::{BitGraph, MutableGraph};

    #[test]
    fn promised_candidate_is_forced() {
        // path 0 - 1 - 2 - 3 - 4 with the end discarded: 3 is its last dominator
        let mut graph = BitGraph::with_order(5);
        for v in 1..5 {
            graph.add_edge(v - 1, v);
        }
        let state = PartialSolution::from_seed(5, &[1, 2], &[4]);
        let mut reducer = Reducer::new(Classifier::new(&graph), state);
        reducer.reduce();

        assert!(reducer.state().is_selected(3));
        assert_eq!(reducer.summary.forced, 1);
    }

    #[test]
    fn twins_do_not_discard_each_other() {
        // seed 0 - 1, candidates 2 and 3 both see only the free vertex 4
        let mut graph = BitGraph::with_order(5);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        let state = PartialSolution::from_seed(5, &[0, 1], &[]);
        let mut reducer = Reducer::new(Classifier::new(&graph), state);
        reducer.reduce();

        assert_eq!(reducer.summary.dominated, 1);
        let state = reducer.into_state();
        assert!(state.is_discarded(2) ^ state.is_discarded(3));
        assert_eq!(Classifier::new(&graph).candidates(&state).cardinality(), 1);
        // 4 only sees covered vertices
        assert!(state.is_discarded(4));
    }

    #[test]
    fn vertex_without_free_neighbor_is_discarded() {
        // triangle 0 1 2 followed by the path 2 - 3 - 4
        let mut graph = BitGraph::with_order(5);
        graph.make_clique(&[0, 1, 2]);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        let state = PartialSolution::from_seed(5, &[0, 1], &[]);
        let mut reducer = Reducer::new(Classifier::new(&graph), state);
        reducer.reduce();

        // free vertices are 3 and 4, every available vertex sees one of them
        assert!(!reducer.state().is_discarded(2));
        assert_eq!(reducer.summary.useless, 0);

        let state = PartialSolution::from_seed(5, &[0, 1, 2], &[]);
        let mut reducer = Reducer::new(Classifier::new(&graph), state);
        reducer.reduce();
        // 4 is the only free vertex left and has no free neighbor itself
        assert!(reducer.state().is_discarded(4));
    }
}
