use crate::graph::{BitGraph, MutableGraph};
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};

/// Erdős–Rényi graph: every pair of vertices is joined with probability `p`.
pub fn gnp(order: usize, p: f64, seed: u64) -> BitGraph {
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    let mut graph = BitGraph::with_order(order);
    for u in 0..order {
        for v in (u + 1)..order {
            if rng.gen_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}

/// Random tree on `order` vertices with extra edges added with probability `p`, so the
/// result is always connected.
pub fn connected_gnp(order: usize, p: f64, seed: u64) -> BitGraph {
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    let mut graph = gnp(order, p, rng.gen());
    for v in 1..order {
        let parent = rng.gen_range(0..v);
        graph.add_edge(parent, v);
    }
    graph
}

#[cfg(test)]
mod tests {
    use crate::generators::{connected_gnp, gnp};
    use crate::graph::BaseGraph;

    #[test]
    fn deterministic_for_a_seed() {
        let a = gnp(20, 0.2, 42);
        let b = gnp(20, 0.2, 42);
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
        assert_eq!(gnp(20, 0.0, 1).size(), 0);
        assert_eq!(gnp(6, 1.0, 1).size(), 15);
    }

    #[test]
    fn connected_variant_is_connected() {
        for seed in 0..10 {
            let graph = connected_gnp(30, 0.05, seed);
            assert!(graph.is_connected());
            assert!(graph.size() >= 29);
        }
    }
}
