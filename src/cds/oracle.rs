use crate::cds::PartialSolution;
use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, BitGraph};

/// Classifies vertices relative to a partial solution. All queries are pure functions of the
/// graph and the given state.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'a> {
    graph: &'a BitGraph,
}

impl<'a> Classifier<'a> {
    pub fn new(graph: &'a BitGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'a BitGraph {
        self.graph
    }

    pub fn is_dominating_set(&self, set: &BitSet) -> bool {
        self.graph.is_dominating_set(set)
    }

    /// The state selects and discards a vertex at once, or the vertices that are not
    /// discarded cannot dominate the graph anymore.
    pub fn is_infeasible(&self, state: &PartialSolution) -> bool {
        state.is_contradictory() || !self.is_dominating_set(&state.usable())
    }

    pub fn is_solved(&self, state: &PartialSolution) -> bool {
        self.is_dominating_set(state.selected())
    }

    /// Available vertices adjacent to the selection. Only these can be selected without
    /// disconnecting it.
    pub fn candidates(&self, state: &PartialSolution) -> BitSet {
        let mut candidates = self.graph.exterior_border(state.selected());
        candidates.and_not(state.discarded());
        candidates
    }

    /// Available vertices whose loss would leave some vertex without a usable dominator.
    pub fn promises(&self, state: &PartialSolution) -> BitSet {
        let usable = state.usable();
        let mut promises = BitSet::new(state.order());
        for a in state.available().iter() {
            let mut without = usable.clone();
            without.unset_bit(a);
            if !self.is_dominating_set(&without) {
                promises.set_bit(a);
            }
        }
        promises
    }

    /// Vertices not dominated by `selected`: outside of it and without a neighbor in it.
    pub fn free(&self, selected: &BitSet) -> BitSet {
        let mut free = self.graph.open_neighborhood_of_set(selected).complement();
        free.and_not(selected);
        free
    }

    pub fn available_neighbors(&self, v: usize, available: &BitSet) -> BitSet {
        self.graph.neighborhood_set(v).intersection(available)
    }

    /// `(available ∩ N(w)) - N(v) - {v}`: the available vertices that see `w` but not `v`.
    pub fn exclusive_neighbors(&self, v: usize, w: usize, available: &BitSet) -> BitSet {
        let mut exclusive = self.available_neighbors(w, available);
        exclusive.and_not(self.graph.neighborhood_set(v));
        exclusive.unset_bit(v);
        exclusive
    }
}

#[cfg(test)]
mod tests {
    use crate::cds::{Classifier, PartialSolution};
    use crate::datastructures::BitSet;
    use crate::graph::{BitGraph, MutableGraph};

    fn path(order: usize) -> BitGraph {
        let mut graph = BitGraph::with_order(order);
        for v in 1..order {
            graph.add_edge(v - 1, v);
        }
        graph
    }

    #[test]
    fn classify_path() {
        let graph = path(5);
        let classifier = Classifier::new(&graph);
        let state = PartialSolution::from_seed(5, &[1, 2], &[]);

        assert_eq!(classifier.candidates(&state).to_vec(), vec![0, 3]);
        assert_eq!(classifier.free(state.selected()).to_vec(), vec![4]);
        assert!(classifier.promises(&state).empty());
        assert!(!classifier.is_infeasible(&state));
        assert!(!classifier.is_solved(&state));
    }

    #[test]
    fn discarding_the_last_dominator_creates_a_promise() {
        let graph = path(5);
        let classifier = Classifier::new(&graph);
        let state = PartialSolution::from_seed(5, &[1, 2], &[4]);

        assert_eq!(classifier.promises(&state).to_vec(), vec![3]);
        assert_eq!(classifier.candidates(&state).to_vec(), vec![0, 3]);

        let lost = PartialSolution::from_seed(5, &[1, 2], &[3, 4]);
        assert!(classifier.is_infeasible(&lost));
    }

    #[test]
    fn contradiction_is_infeasible() {
        let graph = path(3);
        let classifier = Classifier::new(&graph);
        let state = PartialSolution::from_seed(3, &[0, 1], &[1]);
        assert!(classifier.is_infeasible(&state));
    }

    #[test]
    fn classification_is_idempotent() {
        let graph = crate::generators::gnp(12, 0.3, 7);
        let classifier = Classifier::new(&graph);
        let state = PartialSolution::from_seed(12, &[0], &[5, 9]);

        assert_eq!(classifier.candidates(&state), classifier.candidates(&state));
        assert_eq!(classifier.promises(&state), classifier.promises(&state));
        assert_eq!(
            classifier.free(state.selected()),
            classifier.free(state.selected())
        );
    }

    #[test]
    fn exclusive_neighbors() {
        // 0 - 1, 1 - 2, 1 - 3, 2 - 3, 3 - 4
        let mut graph = BitGraph::with_order(5);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        let classifier = Classifier::new(&graph);
        let available = BitSet::from_slice(5, &[2, 3, 4]);

        assert_eq!(classifier.exclusive_neighbors(2, 3, &available).to_vec(), vec![4]);
        assert!(classifier.exclusive_neighbors(3, 2, &available).empty());
        assert_eq!(classifier.available_neighbors(3, &available).to_vec(), vec![2, 4]);
    }
}
