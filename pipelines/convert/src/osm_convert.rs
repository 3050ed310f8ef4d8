//! osm_convert — batch pipeline from an OSM XML extract to a routing-ready
//! graph snapshot.
//!
//! Fixed paths, no flags: drop the extract at [`INPUT_FILE`], run, pick up
//! the document at [`OUTPUT_FILE`].  One deterministic pass — parse, remap,
//! reduce to the largest component, serialize.

use std::path::Path;

use anyhow::{Context, Result};

use rn_graph::retain_largest_component;
use rn_ingest::{assemble, parse_osm};
use rn_output::{FieldNaming, JsonWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const INPUT_FILE: &str = "data/export.osm";
const OUTPUT_FILE: &str = "data/road_graph.json";
/// Node and edge numbering both start at 1 in this pipeline.
const ID_BASE: u32 = 1;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("Parsing OSM file: {INPUT_FILE}...");
    let (raw, stats) = parse_osm(Path::new(INPUT_FILE))
        .with_context(|| format!("cannot read OSM input {INPUT_FILE}"))?;
    println!(
        "Loaded {} nodes, kept {} road ways ({} dropped by the highway filter)",
        stats.nodes_read, stats.ways_kept, stats.ways_dropped
    );
    if stats.missing_node_refs > 0 {
        println!(
            "Warning: {} way segment(s) referenced unknown nodes and were skipped",
            stats.missing_node_refs
        );
    }
    if stats.maxspeed_fallbacks > 0 {
        println!(
            "Warning: {} unparseable maxspeed tag(s) fell back to the default",
            stats.maxspeed_fallbacks
        );
    }

    println!("Processing edges...");
    let (mut graph, _) = assemble(&raw, ID_BASE);
    println!("Built {} nodes, {} directed edges", graph.node_count(), graph.edge_count());

    println!("Cleaning disconnected islands...");
    let report = retain_largest_component(&mut graph);
    println!("Graph check: found {} connected component(s).", report.components);
    println!(
        "Keeping largest component with {} nodes (removing {} island nodes, {} edges).",
        graph.node_count(),
        report.nodes_removed,
        report.edges_removed
    );

    if let Some(dir) = Path::new(OUTPUT_FILE).parent() {
        std::fs::create_dir_all(dir)?;
    }
    JsonWriter::new(FieldNaming::CamelCase)
        .write(&graph, Path::new(OUTPUT_FILE))
        .with_context(|| format!("cannot write {OUTPUT_FILE}"))?;

    println!("Success! Created {OUTPUT_FILE}");
    println!("   Final Nodes: {}", graph.node_count());
    println!("   Final Edges: {}", graph.edge_count());
    Ok(())
}
