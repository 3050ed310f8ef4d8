//! Road graph model and adjacency index.
//!
//! # Data layout
//!
//! `RoadGraph` is the document model: flat `nodes` and `edges` vectors kept
//! in construction order, which is also serialization order.  Node and edge
//! ids are dense as assigned by the ingest pipeline, but component reduction
//! filters without renumbering, so a graph may carry id holes.  Every
//! id-indexed structure in this crate is therefore sized by `max id + 1`,
//! never by element count.
//!
//! `Adjacency` is a transient **Compressed Sparse Row (CSR)** index built on
//! demand for traversal.  Given a node id `n`, its adjacency slots occupy:
//!
//! ```text
//! target[ row_start[n] .. row_start[n+1] ]
//! ```
//!
//! Three views cover every traversal in the toolkit: `directed` (routing),
//! `undirected` (weak-component analysis — each directed edge contributes
//! one adjacency both ways), and `reversed` (the second Kosaraju pass).

use rn_core::{EdgeId, GeoPoint, NodeId};

// ── Model types ───────────────────────────────────────────────────────────────

/// A road-network node: a dense id plus its raw coordinate pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    /// `x` = longitude, `y` = latitude for OSM graphs; synthetic planar
    /// coordinates for generated lattices.  Opaque heuristic signal.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pos: GeoPoint,
}

/// A directed road segment.  A bidirectional road is two edges with swapped
/// endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    /// Physical length in kilometres; always > 0 (degenerate segments are
    /// clamped by the ingest pipeline).
    pub length_km: f64,
    /// Posted speed in km/h; always > 0.
    pub speed_kmh: f64,
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// The normalized directed graph: ordered node and edge collections.
///
/// Fields are `pub` for direct iteration; invariants (edge endpoints exist,
/// positive lengths) are enforced at the ingest and load boundaries, which
/// are the only producers.
#[derive(Debug, Default, Clone)]
pub struct RoadGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest node id present, or `None` for an empty graph.
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.nodes.iter().map(|n| n.id).max()
    }

    /// Number of rows an id-indexed array over this graph needs
    /// (`max id + 1`; zero when empty).
    pub fn id_rows(&self) -> usize {
        self.max_node_id().map_or(0, |m| m.index() + 1)
    }

    /// Position of each node by id: `pos[id] == Some(GeoPoint)` iff a node
    /// with that id exists.  Length = [`id_rows`](Self::id_rows).
    pub fn position_index(&self) -> Vec<Option<GeoPoint>> {
        let mut pos = vec![None; self.id_rows()];
        for node in &self.nodes {
            pos[node.id.index()] = Some(node.pos);
        }
        pos
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

/// CSR adjacency index over a [`RoadGraph`], in one of three views.
///
/// `edge_pos` holds positions into `graph.edges` (not `EdgeId`s — ids can
/// have holes, positions cannot), parallel to `target`.
pub struct Adjacency {
    /// CSR row pointer, length `rows + 1`.
    pub row_start: Vec<u32>,
    /// Neighbor node id per slot.
    pub target: Vec<NodeId>,
    /// Position of the contributing edge in `graph.edges`, per slot.
    pub edge_pos: Vec<u32>,
}

impl Adjacency {
    /// Out-neighbors only, honoring edge direction.
    pub fn directed(graph: &RoadGraph) -> Self {
        Self::build(graph.id_rows(), graph.edges.iter().enumerate().map(|(i, e)| (e.from, e.to, i as u32)))
    }

    /// In-neighbors: every edge contributes `to → from`.
    pub fn reversed(graph: &RoadGraph) -> Self {
        Self::build(graph.id_rows(), graph.edges.iter().enumerate().map(|(i, e)| (e.to, e.from, i as u32)))
    }

    /// Direction-blind view: every directed edge contributes one adjacency
    /// at both endpoints.  This is the reachability view for component
    /// analysis; the stored graph itself remains directed.
    pub fn undirected(graph: &RoadGraph) -> Self {
        Self::build(
            graph.id_rows(),
            graph.edges.iter().enumerate().flat_map(|(i, e)| {
                [(e.from, e.to, i as u32), (e.to, e.from, i as u32)]
            }),
        )
    }

    /// Number of id rows this index covers.
    pub fn rows(&self) -> usize {
        self.row_start.len() - 1
    }

    /// Iterator over the neighbor ids of `n`.  Contiguous slice scan, no
    /// allocation.
    #[inline]
    pub fn neighbors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.row_start[n.index()] as usize;
        let end = self.row_start[n.index() + 1] as usize;
        self.target[start..end].iter().copied()
    }

    /// Iterator over `(edge position, neighbor id)` pairs of `n`.
    #[inline]
    pub fn slots(&self, n: NodeId) -> impl Iterator<Item = (u32, NodeId)> + '_ {
        let start = self.row_start[n.index()] as usize;
        let end = self.row_start[n.index() + 1] as usize;
        self.edge_pos[start..end]
            .iter()
            .copied()
            .zip(self.target[start..end].iter().copied())
    }

    /// Counting sort into CSR: count per row, prefix-sum, then place.
    fn build(rows: usize, entries: impl Iterator<Item = (NodeId, NodeId, u32)> + Clone) -> Self {
        let mut row_start = vec![0u32; rows + 1];
        for (from, _, _) in entries.clone() {
            row_start[from.index() + 1] += 1;
        }
        for i in 1..=rows {
            row_start[i] += row_start[i - 1];
        }

        let slot_count = row_start[rows] as usize;
        let mut target = vec![NodeId::INVALID; slot_count];
        let mut edge_pos = vec![u32::MAX; slot_count];
        let mut cursor = row_start.clone();
        for (from, to, pos) in entries {
            let slot = cursor[from.index()] as usize;
            cursor[from.index()] += 1;
            target[slot] = to;
            edge_pos[slot] = pos;
        }

        Self { row_start, target, edge_pos }
    }
}
