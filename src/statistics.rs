//! Statistics about the phases of a colouring run.

use custom_debug_derive::Debug;
use itertools::{Itertools, MinMaxResult};
use std::time::{Duration, Instant};

use crate::{colouring::Colouring, debug::opt_fmt, graph::Graph};

#[derive(Debug)]
pub struct Statistics {
    // Meta information
    #[debug(skip)]
    start_time: Instant,
    // Graph statistics
    graph_size: usize,
    arc_count: usize,
    min_degree: usize,
    max_degree: usize,
    rejected_records: usize,
    // Colouring statistics
    colours_used: usize,
    uncoloured_nodes: usize,
    entries_written: usize,
    // Timings
    #[debug(with = "opt_fmt")]
    rank_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    colour_time: Option<Duration>,
    #[debug(with = "opt_fmt")]
    end_time: Option<Duration>,
}

impl Statistics {
    pub fn new(graph: &Graph) -> Self {
        let (min_degree, max_degree) = match graph.nodes().map(|node| graph.degree(node)).minmax()
        {
            MinMaxResult::NoElements => (0, 0),
            MinMaxResult::OneElement(degree) => (degree, degree),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        Statistics {
            start_time: Instant::now(),
            graph_size: graph.size(),
            arc_count: graph.iterate_edges().count(),
            min_degree,
            max_degree,
            rejected_records: 0,
            colours_used: 0,
            uncoloured_nodes: 0,
            entries_written: 0,
            rank_time: None,
            colour_time: None,
            end_time: None,
        }
    }

    pub fn log_rejected_records(&mut self, rejected: usize) {
        self.rejected_records = rejected;
    }

    pub fn log_ranked(&mut self, duration: Duration) {
        self.rank_time = Some(duration);
    }

    pub fn log_coloured(&mut self, duration: Duration, colouring: &Colouring) {
        self.colour_time = Some(duration);
        self.colours_used = colouring.assignment.values().unique().count();
        self.uncoloured_nodes = colouring.uncoloured.len();
    }

    pub fn log_written(&mut self, entries: usize) {
        self.entries_written = entries;
    }

    pub fn log_end(&mut self) {
        self.end_time = Some(self.start_time.elapsed());
    }

    #[cfg(not(tarpaulin_include))]
    pub fn report(&self) {
        eprintln!("Raw Statistics: {:#?}", self);
    }
}
