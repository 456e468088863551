#[macro_use]
mod util;

mod datastructures;
pub use datastructures::{BitSet, BitSetIterator};

pub mod cds;
pub mod generators;
pub mod graph;
pub mod io;
pub mod solver;
pub mod validation;

#[cfg(feature = "pace-logging")]
pub mod logging;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;
#[cfg(feature = "cli")]
pub mod timeout;
