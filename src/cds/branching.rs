use crate::cds::{Classifier, PartialSolution};
use crate::datastructures::BitSet;
use crate::graph::BaseGraph;

const NOTHING: [usize; 0] = [];

/// The rule a branching node was created by, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchRule {
    CaseA,
    CaseB,
    CaseC1,
    CaseC2,
    CaseC3,
    Fallback,
}

/// A case split on a candidate `v` and, depending on the case, one or two of its neighbors.
/// The children of every branch together contain a completion of the parent whenever the
/// parent has one, and each child decides `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    /// `v` sees at least three available vertices, or some other available vertex has no
    /// available neighbor.
    CaseA { v: usize },
    /// `v` has the available neighbor `w`.
    CaseB { v: usize, w: usize },
    /// `w1 ~ w2`, `w1` available, `w2` discarded.
    CaseC1 { v: usize, w1: usize, w2: usize },
    /// `w1 ~ w2`, both available.
    CaseC2 { v: usize, w1: usize, w2: usize },
    /// Any other pair of free neighbors.
    CaseC3 { v: usize, w1: usize, w2: usize },
    /// None of the cases applies but `v` can still be selected.
    Fallback { v: usize },
}

impl Branch {
    /// Picks the first applicable case, trying A, B and C in this order. Returns `None` if
    /// there are no candidates, i.e. the selection can no longer grow.
    pub fn select(classifier: &Classifier, state: &PartialSolution) -> Option<Branch> {
        let graph = classifier.graph();
        let available = state.available();
        let candidates = classifier.candidates(state);
        let first = candidates.get_first_set()?;

        let lonely: BitSet = {
            let mut lonely = BitSet::new(state.order());
            for w in available
                .iter()
                .filter(|w| !graph.neighborhood_set(*w).intersects_with(&available))
            {
                lonely.set_bit(w);
            }
            lonely
        };
        for v in candidates.iter() {
            if classifier.available_neighbors(v, &available).cardinality() >= 3 {
                return Some(Branch::CaseA { v });
            }
            if lonely.cardinality() > 1 || (lonely.cardinality() == 1 && !lonely[v]) {
                return Some(Branch::CaseA { v });
            }
        }

        for v in candidates.iter() {
            if let Some(w) = classifier.available_neighbors(v, &available).get_first_set() {
                return Some(Branch::CaseB { v, w });
            }
        }

        let free = classifier.free(state.selected());
        for v in candidates.iter() {
            let free_neighbors = graph.neighborhood_set(v).intersection(&free);
            if free_neighbors.cardinality() < 2 {
                continue;
            }
            let w1 = free_neighbors
                .intersection(&available)
                .get_first_set()
                .or_else(|| free_neighbors.get_first_set())?;
            let w2 = free_neighbors.iter().find(|w| *w != w1)?;
            let adjacent = graph.has_edge(w1, w2);
            return if adjacent && state.is_available(w1) && state.is_discarded(w2) {
                Some(Branch::CaseC1 { v, w1, w2 })
            } else if adjacent && state.is_available(w1) && state.is_available(w2) {
                Some(Branch::CaseC2 { v, w1, w2 })
            } else {
                Some(Branch::CaseC3 { v, w1, w2 })
            };
        }

        Some(Branch::Fallback { v: first })
    }

    pub fn rule(&self) -> BranchRule {
        match self {
            Branch::CaseA { .. } => BranchRule::CaseA,
            Branch::CaseB { .. } => BranchRule::CaseB,
            Branch::CaseC1 { .. } => BranchRule::CaseC1,
            Branch::CaseC2 { .. } => BranchRule::CaseC2,
            Branch::CaseC3 { .. } => BranchRule::CaseC3,
            Branch::Fallback { .. } => BranchRule::Fallback,
        }
    }

    pub fn vertex(&self) -> usize {
        match *self {
            Branch::CaseA { v }
            | Branch::CaseB { v, .. }
            | Branch::CaseC1 { v, .. }
            | Branch::CaseC2 { v, .. }
            | Branch::CaseC3 { v, .. }
            | Branch::Fallback { v } => v,
        }
    }

    /// Sub-problems in the order they are searched.
    pub fn children(
        &self,
        classifier: &Classifier,
        state: &PartialSolution,
    ) -> Vec<PartialSolution> {
        let available = state.available();
        let exclusive = |v: usize, w: usize| classifier.exclusive_neighbors(v, w, &available);
        match *self {
            Branch::CaseA { v } | Branch::Fallback { v } => vec![
                state.fork([v], NOTHING),
                state.fork(NOTHING, [v]),
            ],
            Branch::CaseB { v, w } => {
                let u = exclusive(v, w);
                vec![
                    state.fork(NOTHING, [v]),
                    state.fork([v, w], NOTHING),
                    state.fork([v], u.iter().chain(Some(w))),
                ]
            }
            Branch::CaseC1 { v, w1, .. } => {
                let u1 = exclusive(v, w1);
                vec![
                    state.fork(NOTHING, [v]),
                    state.fork([v, w1], NOTHING),
                    state.fork([v], u1.iter().chain(Some(w1))),
                ]
            }
            Branch::CaseC2 { v, w1, w2 } => {
                let mut u = exclusive(v, w1);
                u.or(&exclusive(v, w2));
                vec![
                    state.fork(NOTHING, [v]),
                    state.fork([v, w1], NOTHING),
                    state.fork([v, w2], [w1]),
                    state.fork([v], u.iter().chain([w1, w2].iter().copied())),
                ]
            }
            Branch::CaseC3 { v, w1, w2 } => {
                let u1 = exclusive(v, w1);
                let u2 = exclusive(v, w2);
                vec![
                    state.fork(NOTHING, [v]),
                    state.fork([v, w1], NOTHING),
                    state.fork([v, w2], [w1]),
                    state.fork([v], u1.iter().chain([w1, w2].iter().copied())),
                    state.fork([v], u2.iter().chain([w1, w2].iter().copied())),
                ]
            }
        }
    }
}
