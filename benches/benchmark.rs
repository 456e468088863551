use connected_domset::cds::{BranchAndReduce, Combinator, PartialSolution};
use connected_domset::generators::connected_gnp;
use connected_domset::graph::{BaseGraph, BitGraph};
use connected_domset::solver::Solver;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn first_edge_seed(graph: &BitGraph) -> PartialSolution {
    let (u, v) = graph.edges().next().unwrap();
    PartialSolution::from_seed(graph.order(), &[u, v], &[])
}

fn branch_and_reduce(c: &mut Criterion) {
    let graph = connected_gnp(30, 0.1, 7);
    let seed = first_edge_seed(&graph);

    c.bench_function("branch_and_reduce_first_feasible", |b| {
        b.iter(|| BranchAndReduce::new(&graph).solve(black_box(seed.clone())))
    });

    c.bench_function("branch_and_reduce_without_reductions", |b| {
        b.iter(|| {
            BranchAndReduce::new(&graph)
                .apply_reductions(false)
                .solve(black_box(seed.clone()))
        })
    });

    let small = connected_gnp(16, 0.15, 7);
    let small_seed = first_edge_seed(&small);
    c.bench_function("branch_and_reduce_smallest", |b| {
        b.iter(|| {
            BranchAndReduce::new(&small)
                .combinator(Combinator::Smallest)
                .solve(black_box(small_seed.clone()))
        })
    });
}

fn solver(c: &mut Criterion) {
    let graph = connected_gnp(25, 0.1, 11);

    c.bench_function("solver_all_seeds", |b| {
        b.iter(|| Solver::default().solve(black_box(&graph)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = branch_and_reduce, solver
}
criterion_main!(benches);
