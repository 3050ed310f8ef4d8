//! JSON backend: snapshot writer and document reader.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use rn_core::{EdgeId, NodeId};
use rn_graph::{Edge, Node, RoadGraph};

use crate::doc::{FieldNaming, GraphDoc};
use crate::OutputResult;

// ── Writer ────────────────────────────────────────────────────────────────────

/// Writes a [`RoadGraph`] as one pretty-printed JSON document.
///
/// The document is serialized to a sibling `*.tmp` file and renamed into
/// place, so the target path never holds a partially written snapshot: a
/// failed run leaves the previous document (or nothing) behind.
pub struct JsonWriter {
    naming: FieldNaming,
}

impl JsonWriter {
    pub fn new(naming: FieldNaming) -> Self {
        Self { naming }
    }

    /// Serialize `graph` to `path`.
    pub fn write(&self, graph: &RoadGraph, path: &Path) -> OutputResult<()> {
        let tmp = tmp_path(path);
        let result = self.write_to(graph, &tmp).and_then(|()| {
            fs::rename(&tmp, path)?;
            Ok(())
        });
        if result.is_err() {
            // Best effort; the error we report is the write failure.
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    /// Serialize `graph` as a string (used by tests and determinism checks).
    pub fn to_json(&self, graph: &RoadGraph) -> OutputResult<String> {
        let doc = GraphDoc { graph, naming: self.naming };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    fn write_to(&self, graph: &RoadGraph, path: &Path) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        let doc = GraphDoc { graph, naming: self.naming };
        serde_json::to_writer_pretty(&mut out, &doc)?;
        out.flush()?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// Counters for anomalies tolerated while loading a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Edges dropped because `from` or `to` named a node not in the
    /// document.  Skipped with a count, never fatal — matching how the
    /// downstream graph runtime has always treated them.
    pub edges_skipped: usize,
}

#[derive(Deserialize)]
struct EdgeRecord {
    id: u32,
    from: u32,
    to: u32,
    length: f64,
    #[serde(rename = "speedLimit", alias = "speed_limit", alias = "speedlimit")]
    speed_limit: f64,
}

#[derive(Deserialize)]
struct GraphRecord {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

/// Read a graph document back into a [`RoadGraph`].
///
/// Accepts all historical speed-key spellings and ignores unknown fields.
///
/// # Errors
///
/// [`crate::OutputError::Io`] if the file cannot be read,
/// [`crate::OutputError::Json`] if it is not a graph document.
pub fn read_graph(path: &Path) -> OutputResult<(RoadGraph, LoadStats)> {
    let record: GraphRecord = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let mut stats = LoadStats::default();

    let present: HashSet<NodeId> = record.nodes.iter().map(|n| n.id).collect();
    let mut edges = Vec::with_capacity(record.edges.len());
    for e in record.edges {
        let (from, to) = (NodeId(e.from), NodeId(e.to));
        if !present.contains(&from) || !present.contains(&to) {
            stats.edges_skipped += 1;
            continue;
        }
        edges.push(Edge {
            id: EdgeId(e.id),
            from,
            to,
            length_km: e.length,
            speed_kmh: e.speed_limit,
        });
    }

    Ok((RoadGraph { nodes: record.nodes, edges }, stats))
}
