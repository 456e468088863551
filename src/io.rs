use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, BitGraph, MutableGraph};
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn invalid(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message.to_string())
}

fn nums_error(res: &[Result<usize, std::num::ParseIntError>]) -> bool {
    res.len() != 2 || res.iter().any(|r| r.is_err())
}

/// Parses `p ds <n> <m>`.
pub fn pace_p(line: &str) -> Result<(usize, usize), io::Error> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some("p") || parts.next() != Some("ds") {
        return Err(invalid("Invalid problem line"));
    }
    let nums: Vec<Result<usize, std::num::ParseIntError>> = parts.map(|s| s.parse()).collect();
    if nums_error(&nums) {
        return Err(invalid("Invalid problem line"));
    }
    match (&nums[0], &nums[1]) {
        (Ok(n), Ok(m)) => Ok((*n, *m)),
        _ => Err(invalid("Invalid problem line")),
    }
}

/// Parses an edge line `u v` with 1-based vertex ids into 0-based ids.
pub fn pace_e(line: &str) -> Result<(usize, usize), io::Error> {
    let nums: Vec<Result<usize, std::num::ParseIntError>> =
        line.split_whitespace().map(|s| s.parse()).collect();
    if nums_error(&nums) {
        return Err(invalid("Invalid edge line"));
    }
    match (&nums[0], &nums[1]) {
        (Ok(u), Ok(v)) if *u > 0 && *v > 0 => Ok((*u - 1, *v - 1)),
        _ => Err(invalid("Invalid edge line")),
    }
}

/// Reader for the PACE dominating set graph format.
pub struct PaceReader<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<PaceReader<T>> for BitGraph {
    type Error = io::Error;

    fn try_from(reader: PaceReader<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph: Option<BitGraph> = None;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            match line.chars().next() {
                None | Some('c') => {}
                Some('p') => {
                    if graph.is_some() {
                        return Err(invalid("Duplicate problem line"));
                    }
                    let (n, _) = pace_p(line)?;
                    graph = Some(BitGraph::with_order(n));
                }
                _ => {
                    let graph = graph
                        .as_mut()
                        .ok_or_else(|| invalid("Edge before problem line"))?;
                    let (u, v) = pace_e(line)?;
                    if u >= graph.order() || v >= graph.order() {
                        return Err(invalid("Vertex out of range"));
                    }
                    if u != v {
                        graph.add_edge(u, v);
                    }
                }
            }
        }
        graph.ok_or_else(|| invalid("Missing problem line"))
    }
}

/// Writes a solution: its size on the first line, then one 1-based vertex per line.
pub struct PaceWriter<'a, W: Write> {
    solution: &'a BitSet,
    writer: W,
}

impl<'a, W: Write> PaceWriter<'a, W> {
    pub fn new(solution: &'a BitSet, writer: W) -> Self {
        Self { solution, writer }
    }

    pub fn output(mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", self.solution.cardinality())?;
        for v in self.solution.iter() {
            writeln!(self.writer, "{}", v + 1)?;
        }
        self.writer.flush()
    }
}
