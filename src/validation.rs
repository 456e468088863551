use crate::datastructures::BitSet;
use crate::graph::BaseGraph;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CdsValidationError {
    OrderMismatch { graph: usize, set: usize },
    NotDominated(usize),
    NotConnected,
}

impl Display for CdsValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            CdsValidationError::OrderMismatch { graph, set } => {
                write!(f, "Order Mismatch: graph has {} vertices, set {}", graph, set)
            }
            CdsValidationError::NotDominated(v) => write!(f, "Not Dominated: {}", v),
            CdsValidationError::NotConnected => write!(f, "Not Connected"),
        }
    }
}

impl std::error::Error for CdsValidationError {}

/// Checks that `set` is a connected dominating set of `graph`.
pub fn verify<G: BaseGraph>(graph: &G, set: &BitSet) -> Result<(), CdsValidationError> {
    if graph.order() != set.len() {
        return Err(CdsValidationError::OrderMismatch {
            graph: graph.order(),
            set: set.len(),
        });
    }
    if let Some(v) = graph
        .vertices()
        .find(|v| !set[*v] && !graph.neighborhood_set(*v).intersects_with(set))
    {
        return Err(CdsValidationError::NotDominated(v));
    }
    if !graph.is_connected_subset(set) {
        return Err(CdsValidationError::NotConnected);
    }
    Ok(())
}

/// Size of a smallest connected dominating set containing `selected` and avoiding
/// `discarded`, by enumerating every vertex subset.
#[cfg(test)]
pub(crate) fn brute_force_minimum<G: BaseGraph>(
    graph: &G,
    selected: &BitSet,
    discarded: &BitSet,
) -> Option<usize> {
    let n = graph.order();
    assert!(n <= 16);
    let mut best: Option<usize> = None;
    for mask in 0u32..(1 << n) {
        let members: Vec<usize> = (0..n).filter(|v| mask & (1 << v) != 0).collect();
        let set = BitSet::from_slice(n, &members);
        if !selected.is_subset_of(&set) || set.intersects_with(discarded) {
            continue;
        }
        if verify(graph, &set).is_ok() && best.map_or(true, |b| set.cardinality() < b) {
            best = Some(set.cardinality());
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use crate::datastructures::BitSet;
    use crate::graph::{BitGraph, MutableGraph};
    use crate::validation::{brute_force_minimum, verify, CdsValidationError};

    fn cycle(order: usize) -> BitGraph {
        let mut graph = BitGraph::with_order(order);
        for v in 0..order {
            graph.add_edge(v, (v + 1) % order);
        }
        graph
    }

    #[test]
    fn accepts_connected_dominating_set() {
        let graph = cycle(5);
        assert_eq!(verify(&graph, &BitSet::from_slice(5, &[0, 1, 2])), Ok(()));
    }

    #[test]
    fn rejects_invalid_sets() {
        let graph = cycle(6);
        assert_eq!(
            verify(&graph, &BitSet::from_slice(6, &[0, 1])),
            Err(CdsValidationError::NotDominated(3))
        );
        assert_eq!(
            verify(&graph, &BitSet::from_slice(6, &[0, 3])),
            Err(CdsValidationError::NotConnected)
        );
        assert_eq!(
            verify(&graph, &BitSet::new(5)),
            Err(CdsValidationError::OrderMismatch { graph: 6, set: 5 })
        );
        assert_eq!(
            CdsValidationError::NotDominated(3).to_string(),
            "Not Dominated: 3"
        );
    }

    #[test]
    fn brute_force_on_cycles() {
        let graph = cycle(6);
        let none = BitSet::new(6);
        assert_eq!(brute_force_minimum(&graph, &none, &none), Some(4));
        assert_eq!(
            brute_force_minimum(
                &graph,
                &BitSet::from_slice(6, &[0]),
                &BitSet::from_slice(6, &[1, 5])
            ),
            None
        );
    }
}
