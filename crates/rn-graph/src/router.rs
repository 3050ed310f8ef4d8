//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! Consumers call routing via the [`Router`] trait, so applications can swap
//! in custom implementations (Dijkstra, contraction hierarchies, congestion
//! models) without touching the graph model.  The default [`AStarRouter`]
//! is sufficient for one-shot queries against converted graphs.
//!
//! # Cost model
//!
//! Edge cost is free-flow travel time, `length_km / speed_kmh` hours.  The
//! heuristic is straight-line distance in raw coordinate space divided by a
//! 70 km/h reference speed — an underestimate for geographic graphs (a
//! degree is far more than 70 km of road) and for unit-length lattices, so
//! it never overestimates remaining time.  Costs are compared as integer
//! milliseconds with the node id as secondary key, which keeps heap order
//! deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rn_core::{EdgeId, NodeId};

use crate::graph::{Adjacency, RoadGraph};
use crate::GraphError;

/// Reference speed (km/h) dividing the heuristic distance into hours.
const V_REF: f64 = 70.0;

const MS_PER_HOUR: f64 = 3_600_000.0;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered list of `EdgeId`s plus totals.
#[derive(Debug, Clone)]
pub struct Route {
    /// Edges to traverse in order, from source to destination.
    pub edges: Vec<EdgeId>,
    /// Free-flow travel time in hours.
    pub time_hours: f64,
    /// Total route length in kilometres.
    pub distance_km: f64,
}

impl Route {
    /// Travel time in minutes, the unit the legacy consumers report.
    pub fn eta_minutes(&self) -> f64 {
        self.time_hours * 60.0
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
pub trait Router {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` is an empty route, not an error.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is not in the graph,
    /// [`GraphError::NoRoute`] if the destination is unreachable.
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<Route, GraphError>;
}

/// Time-cost A* over the CSR adjacency index.
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<Route, GraphError> {
        astar(graph, from, to)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Edge traversal cost in milliseconds.  Non-positive speeds are clamped to
/// 1 km/h so a malformed edge slows a route down instead of corrupting it.
#[inline]
fn edge_cost_ms(length_km: f64, speed_kmh: f64) -> u64 {
    let speed = if speed_kmh > 0.0 { speed_kmh } else { 1.0 };
    (length_km / speed * MS_PER_HOUR) as u64
}

fn astar(graph: &RoadGraph, from: NodeId, to: NodeId) -> Result<Route, GraphError> {
    let pos = graph.position_index();
    let at = |n: NodeId| pos.get(n.index()).copied().flatten();

    if at(from).is_none() {
        return Err(GraphError::NodeNotFound(from));
    }
    let Some(goal_pos) = at(to) else {
        return Err(GraphError::NodeNotFound(to));
    };

    if from == to {
        return Ok(Route { edges: vec![], time_hours: 0.0, distance_km: 0.0 });
    }

    let adj = Adjacency::directed(graph);
    let rows = graph.id_rows();

    // g_score[v] = best known cost (ms) to reach v.
    let mut g_score = vec![u64::MAX; rows];
    // prev_edge[v] = position in `graph.edges` of the edge that reached v;
    // u32::MAX for unreached nodes.
    let mut prev_edge = vec![u32::MAX; rows];

    g_score[from.index()] = 0;

    let h = |n: NodeId| -> u64 {
        // Positions exist for every id the traversal can reach.
        let p = pos[n.index()].unwrap_or(goal_pos);
        (p.planar_distance(goal_pos) / V_REF * MS_PER_HOUR) as u64
    };

    // Min-heap on (f, g, node).  Reverse makes BinaryHeap (max) behave as a
    // min-heap; the trailing NodeId gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u64, u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((h(from), 0, from)));

    while let Some(Reverse((_, g, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(graph, &prev_edge, to, g));
        }

        // Skip stale heap entries.
        if g > g_score[node.index()] {
            continue;
        }

        for (edge_pos, neighbor) in adj.slots(node) {
            let edge = &graph.edges[edge_pos as usize];
            let new_g = g.saturating_add(edge_cost_ms(edge.length_km, edge.speed_kmh));

            if new_g < g_score[neighbor.index()] {
                g_score[neighbor.index()] = new_g;
                prev_edge[neighbor.index()] = edge_pos;
                heap.push(Reverse((new_g.saturating_add(h(neighbor)), new_g, neighbor)));
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(graph: &RoadGraph, prev_edge: &[u32], to: NodeId, total_ms: u64) -> Route {
    let mut edges = Vec::new();
    let mut distance_km = 0.0;
    let mut current = to;
    loop {
        let pos = prev_edge[current.index()];
        if pos == u32::MAX {
            break;
        }
        let edge = &graph.edges[pos as usize];
        edges.push(edge.id);
        distance_km += edge.length_km;
        current = edge.from;
    }
    edges.reverse();
    Route {
        edges,
        time_hours: total_ms as f64 / MS_PER_HOUR,
        distance_km,
    }
}
