pub use base_graph::BaseGraph;
pub use bit_graph::{BitGraph, BitGraphDfs};
pub use mutable_graph::MutableGraph;

mod base_graph;
mod bit_graph;
mod mutable_graph;
