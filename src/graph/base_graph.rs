use crate::datastructures::BitSet;
use std::fmt::Debug;

pub trait BaseGraph: Clone + Debug {
    fn degree(&self, u: usize) -> usize;
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood_set(&self, u: usize) -> &BitSet;

    /// Every vertex outside `set` has a neighbor inside `set`.
    fn is_dominating_set(&self, set: &BitSet) -> bool {
        self.vertices()
            .filter(|u| !set[*u])
            .all(|u| self.neighborhood_set(u).intersects_with(set))
    }

    /// The subgraph induced by `set` is connected. The empty set counts as connected.
    fn is_connected_subset(&self, set: &BitSet) -> bool {
        let start = match set.get_first_set() {
            Some(v) => v,
            None => return true,
        };
        let mut visited = BitSet::new(self.order());
        visited.set_bit(start);
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for v in self.neighborhood(u) {
                if set[v] && !visited.set_bit(v) {
                    stack.push(v);
                }
            }
        }
        visited.cardinality() == set.cardinality()
    }
}
