//! Raw model → final graph assembly.

use rn_core::{EdgeId, GeoPoint, NodeId};
use rn_graph::{Edge, Node, RoadGraph};

use crate::model::RawModel;
use crate::remap::IdRemapper;

/// Counters for anomalies tolerated during assembly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssembleStats {
    /// Links dropped because an endpoint was missing from the node table.
    /// Producers already filter these, so a non-zero count here means the
    /// raw model itself was inconsistent.
    pub links_skipped: usize,
}

/// Turn a raw model into a [`RoadGraph`].
///
/// Links are scanned in emission order; each endpoint gets a dense internal
/// id on first encounter (so internal ids follow link order, and nodes the
/// links never reference are dropped), and each surviving link becomes one
/// directed edge with the next sequential edge id.  Node and edge numbering
/// both start at `id_base`.
///
/// The result is deterministic: identical raw models assemble to identical
/// graphs.
pub fn assemble(raw: &RawModel, id_base: u32) -> (RoadGraph, AssembleStats) {
    let mut remap = IdRemapper::with_base(id_base);
    let mut graph = RoadGraph::with_capacity(raw.nodes.len(), raw.links.len());
    let mut stats = AssembleStats::default();
    let mut next_edge = id_base;

    for link in &raw.links {
        let (Some(&from_pos), Some(&to_pos)) =
            (raw.nodes.get(&link.from_ext), raw.nodes.get(&link.to_ext))
        else {
            stats.links_skipped += 1;
            continue;
        };

        let from = intern(link.from_ext, from_pos, &mut remap, &mut graph);
        let to = intern(link.to_ext, to_pos, &mut remap, &mut graph);

        graph.edges.push(Edge {
            id: EdgeId(next_edge),
            from,
            to,
            length_km: link.length_km,
            speed_kmh: link.speed_kmh,
        });
        next_edge += 1;
    }

    (graph, stats)
}

/// Remap one endpoint, materializing its node on first assignment.
fn intern(ext: i64, pos: GeoPoint, remap: &mut IdRemapper, graph: &mut RoadGraph) -> NodeId {
    let before = remap.len();
    let id = remap.get_or_assign(ext);
    if remap.len() > before {
        graph.nodes.push(Node { id, pos });
    }
    id
}
