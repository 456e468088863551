pub use branching::{Branch, BranchRule};
pub use oracle::Classifier;
pub use reduction::{Reducer, ReductionSummary};
pub use search::{connected_dominating_set, BranchAndReduce, Combinator, SearchStatistics};
pub use state::PartialSolution;

mod branching;
mod oracle;
mod reduction;
mod search;
mod state;
