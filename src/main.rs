use connected_domset::cds::Combinator;
use connected_domset::graph::BitGraph;
use connected_domset::io::{PaceReader, PaceWriter};
use connected_domset::solver::Solver;
use std::convert::TryFrom;
use std::fs::{File, OpenOptions};
use std::io;
use std::io::{stdin, stdout, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cds-cli",
    about = "Computes a connected dominating set for a given input graph."
)]
struct Opt {
    /// Input file, using the dominating set graph format of the PACE 2025 challenge.
    /// `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file. `stdout` if not specified.
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,

    /// Search every branch and keep the smallest set instead of stopping at the first one.
    #[structopt(short, long)]
    smallest: bool,

    /// Disable the reduction rules between branchings.
    #[structopt(long)]
    no_reductions: bool,

    /// Stop trying further seeds after this many seconds.
    #[structopt(short, long)]
    timeout: Option<u64>,
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    #[cfg(feature = "pace-logging")]
    connected_domset::logging::build_pace_logger();
    #[cfg(feature = "handle-ctrlc")]
    connected_domset::signals::initialize();
    if let Some(seconds) = opt.timeout {
        connected_domset::timeout::initialize_timeout(seconds);
    }

    let graph: BitGraph = match opt.input {
        Some(path) => {
            let file = File::open(path)?;
            let reader = PaceReader(BufReader::new(file));
            BitGraph::try_from(reader)?
        }
        None => {
            let stdin = stdin();
            let reader = PaceReader(stdin.lock());
            BitGraph::try_from(reader)?
        }
    };

    let combinator = if opt.smallest {
        println!("c Keeping the smallest set of every branching.");
        Combinator::Smallest
    } else {
        Combinator::FirstFeasible
    };
    let solution = Solver::default()
        .combinator(combinator)
        .apply_reductions(!opt.no_reductions)
        .solve(&graph);

    let solution = match solution {
        Some(solution) => solution,
        None => {
            println!("c Graph has no connected dominating set.");
            return Ok(());
        }
    };

    match opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            PaceWriter::new(&solution, writer).output()
        }
        None => {
            let writer = stdout();
            PaceWriter::new(&solution, writer).output()
        }
    }
}
