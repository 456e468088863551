use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;

/// Simple undirected graph on the vertices `0..order`, one neighborhood bit set per vertex.
#[derive(Clone, Debug)]
pub struct BitGraph {
    graph: Vec<BitSet>,
    size: usize,
}

impl From<Vec<BitSet>> for BitGraph {
    fn from(graph: Vec<BitSet>) -> Self {
        let size = graph.iter().map(|nb| nb.cardinality()).sum::<usize>() / 2;
        Self { graph, size }
    }
}

impl BitGraph {
    /// Union of the open neighborhoods of `c`, without `c` itself.
    pub fn exterior_border(&self, c: &BitSet) -> BitSet {
        let mut border = BitSet::new(self.graph.len());

        for v in c.iter() {
            border.or(&self.graph[v])
        }
        border.and_not(c);
        border
    }

    /// Vertices with at least one neighbor in `set`.
    pub fn open_neighborhood_of_set(&self, set: &BitSet) -> BitSet {
        let mut result = BitSet::new(self.graph.len());
        for v in set.iter() {
            result.or(&self.graph[v]);
        }
        result
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.graph.len()).flat_map(move |u| {
            self.graph[u]
                .iter()
                .filter(move |v| u < *v)
                .map(move |v| (u, v))
        })
    }

    pub fn dfs(&self, u: usize) -> BitGraphDfs {
        assert!(u < self.graph.len());
        let mut visited = BitSet::new(self.graph.len());
        visited.set_bit(u);
        BitGraphDfs {
            graph: self,
            stack: vec![u],
            visited,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.graph.is_empty() || self.dfs(0).count() == self.graph.len()
    }
}

pub struct BitGraphDfs<'a> {
    graph: &'a BitGraph,
    stack: Vec<usize>,
    visited: BitSet,
}

impl<'a> Iterator for BitGraphDfs<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        for c in self.graph.graph[current].iter() {
            if !self.visited[c] {
                self.stack.push(c);
                self.visited.set_bit(c);
            }
        }
        Some(current)
    }
}

impl MutableGraph for BitGraph {
    fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        assert!(u < self.graph.len() && v < self.graph.len());
        if !self.graph[u].set_bit(v) {
            self.size += 1;
        }
        self.graph[v].set_bit(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        if self.graph[u].unset_bit(v) {
            self.size -= 1;
        }
        self.graph[v].unset_bit(u);
    }

    fn with_order(order: usize) -> Self {
        Self {
            graph: vec![BitSet::new(order); order],
            size: 0,
        }
    }
}

impl BaseGraph for BitGraph {
    fn degree(&self, u: usize) -> usize {
        self.graph[u].cardinality()
    }

    fn order(&self) -> usize {
        self.graph.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.graph[u][v]
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.graph.len())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.graph[u].iter())
    }

    fn neighborhood_set(&self, u: usize) -> &BitSet {
        &self.graph[u]
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::BitSet;
    use crate::graph::{BaseGraph, BitGraph, MutableGraph};

    #[test]
    fn test_order() {
        let graph = BitGraph::with_order(0);
        assert_eq!(graph.order(), 0);
        assert!(graph.is_connected());

        let graph = BitGraph::with_order(4);
        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 0);
        assert!(graph.vertices().all(|v| graph.degree(v) == 0));
    }

    #[test]
    fn test_degree() {
        let mut graph = BitGraph::with_order(2);
        graph.add_edge(0, 1);

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.size(), 1);

        graph.add_edge(1, 0);

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.size(), 1);

        graph.remove_edge(0, 1);

        assert_eq!(graph.degree(0), 0);
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.size(), 0);
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    #[should_panic]
    fn self_loop_is_rejected() {
        let mut graph = BitGraph::with_order(2);
        graph.add_edge(1, 1);
    }

    #[test]
    fn domination() {
        // path 0 - 1 - 2 - 3
        let mut graph = BitGraph::with_order(4);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        assert!(graph.is_dominating_set(&BitSet::from_slice(4, &[1, 2])));
        assert!(graph.is_dominating_set(&BitSet::from_slice(4, &[0, 3])));
        assert!(!graph.is_dominating_set(&BitSet::from_slice(4, &[1])));
        assert!(!graph.is_dominating_set(&BitSet::new(4)));
        assert!(BitGraph::with_order(0).is_dominating_set(&BitSet::new(0)));
    }

    #[test]
    fn connected_subsets() {
        let mut graph = BitGraph::with_order(5);
        graph.make_clique(&[0, 1, 2]);
        graph.add_edge(2, 3);

        assert!(graph.is_connected_subset(&BitSet::from_slice(5, &[0, 2, 3])));
        assert!(!graph.is_connected_subset(&BitSet::from_slice(5, &[0, 3])));
        assert!(graph.is_connected_subset(&BitSet::new(5)));
        assert!(!graph.is_connected());
        assert_eq!(graph.dfs(0).count(), 4);
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (1, 2), (2, 3)]
        );
    }

    #[test]
    fn borders() {
        let mut graph = BitGraph::with_order(4);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        let set = BitSet::from_slice(4, &[1, 2]);
        assert_eq!(graph.exterior_border(&set).to_vec(), vec![0, 3]);
        assert_eq!(graph.open_neighborhood_of_set(&set).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.neighborhood_set(2), &BitSet::from_slice(4, &[1, 3]));
    }
}
