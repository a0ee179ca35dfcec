#![warn(rust_2018_idioms)]

//! Register allocation as greedy colouring of an
//! interference graph: rank the nodes by degree, then give
//! each one the first palette colour its neighbours left free.

use std::fs::File;

mod graph;

mod input;
use input::read_graph;

mod ranking;
use ranking::rank_nodes;

mod colouring;
use colouring::colour_graph;

mod output;
use output::write_colouring;

mod parser;

mod statistics;
use statistics::Statistics;

mod debug;
pub use debug::Error;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    // Read the graph from the input file and ...
    let (graph, diagnostics, settings) = read_graph()?;

    let mut statistics = Statistics::new(&graph);
    statistics.log_rejected_records(diagnostics.len());
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    // ... rank its nodes by interference degree. Then ...
    time!(rank_time, order, rank_nodes(&graph));
    statistics.log_ranked(rank_time);

    // ... colour the nodes greedily along the ranking ...
    time!(colour_time, colouring, colour_graph(&order, &graph));
    statistics.log_coloured(colour_time, &colouring);
    for node in &colouring.uncoloured {
        eprintln!("Palette exhausted, node {} stays uncoloured", node);
    }

    // ... and write the assignment out.
    let mut output_file = File::create(&settings.output_path).map_err(Error::OutputFile)?;
    let written = write_colouring(&mut output_file, &colouring.assignment);
    statistics.log_written(written);

    statistics.log_end();
    statistics.report();

    Ok(())
}
