//! filter_graph — restrict an existing graph document to its largest
//! strongly-connected component.
//!
//! The converter's island removal is direction-blind, which leaves a subtle
//! hazard: districts attached to the map by one-way edges in a single
//! direction.  This post-processing pass honors direction and drops them.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use rn_graph::retain_largest_scc;
use rn_output::{read_graph, FieldNaming, JsonWriter};

fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();
    let [_, input, output] = args.as_slice() else {
        eprintln!("Usage: filter_graph <input_file> <output_file>");
        return Ok(ExitCode::from(2));
    };

    let (mut graph, load) = read_graph(Path::new(input))
        .with_context(|| format!("cannot load graph from {input}"))?;
    println!("Loaded: {} nodes, {} edges", graph.node_count(), graph.edge_count());
    if load.edges_skipped > 0 {
        println!(
            "Warning: skipped {} edge(s) referencing unknown nodes",
            load.edges_skipped
        );
    }

    let report = retain_largest_scc(&mut graph);
    println!("Found {} strongly connected component(s)", report.components);
    println!("Largest component: {} nodes", graph.node_count());
    println!(
        "Post filtering: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    JsonWriter::new(FieldNaming::CamelCase)
        .write(&graph, Path::new(output))
        .with_context(|| format!("cannot write {output}"))?;
    println!("Saved to: {output}");
    Ok(ExitCode::SUCCESS)
}
