//! route — one-shot routing query against a graph document.
//!
//! Loads a snapshot, runs A* between two node ids, prints the edge sequence
//! with ETA and distance.  A smoke check that a converted graph actually
//! routes, without standing up any consumer.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use rn_core::NodeId;
use rn_graph::{AStarRouter, Router};
use rn_output::read_graph;

fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().collect();
    let [_, graph_file, from, to] = args.as_slice() else {
        eprintln!("Usage: route <graph_file> <from_node_id> <to_node_id>");
        return Ok(ExitCode::from(2));
    };

    let from = NodeId(from.parse().context("from_node_id must be an integer")?);
    let to = NodeId(to.parse().context("to_node_id must be an integer")?);

    let (graph, _) = read_graph(Path::new(graph_file))
        .with_context(|| format!("cannot load graph from {graph_file}"))?;
    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let route = AStarRouter.route(&graph, from, to)?;
    let edge_ids: Vec<u32> = route.edges.iter().map(|e| e.0).collect();
    println!("Route {from} -> {to}: {} edge(s)", edge_ids.len());
    println!("   edges:    {edge_ids:?}");
    println!("   ETA:      {:.1} min", route.eta_minutes());
    println!("   distance: {:.3} km", route.distance_km);
    Ok(ExitCode::SUCCESS)
}
