//! Strongly-connected-component filtering.
//!
//! The weak reducer in [`reduce`](crate::reduce) is what the conversion
//! pipeline runs; this module is the stricter post-processing filter for
//! already-serialized graphs.  Honoring edge direction catches a failure
//! mode the weak view cannot: a district connected to the rest of the map
//! only by one-way edges in a single direction is weakly connected but
//! unroutable in one direction.
//!
//! Kosaraju two-pass, both passes iterative with explicit stacks so depth
//! is bounded on large graphs.

use rn_core::NodeId;

use crate::graph::{Adjacency, RoadGraph};
use crate::reduce::{retain_largest_of, ComponentReport};

/// All strongly-connected components, as node-id lists.
///
/// Component order follows reverse finish order of the first pass, so the
/// result is deterministic for a given graph.
pub fn strongly_connected_components(graph: &RoadGraph) -> Vec<Vec<NodeId>> {
    let forward = Adjacency::directed(graph);
    let reverse = Adjacency::reversed(graph);
    let rows = graph.id_rows();

    // Pass 1: forward DFS, recording nodes in order of exhaustion.
    let mut visited = vec![false; rows];
    let mut finish: Vec<NodeId> = Vec::with_capacity(graph.nodes.len());
    // Frame: (node, cursor into its CSR row).
    let mut stack: Vec<(NodeId, u32)> = Vec::new();

    for seed in graph.nodes.iter().map(|n| n.id) {
        if visited[seed.index()] {
            continue;
        }
        visited[seed.index()] = true;
        stack.push((seed, forward.row_start[seed.index()]));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let cursor = frame.1;
            if cursor < forward.row_start[node.index() + 1] {
                frame.1 += 1;
                let next = forward.target[cursor as usize];
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    stack.push((next, forward.row_start[next.index()]));
                }
            } else {
                finish.push(node);
                stack.pop();
            }
        }
    }

    // Pass 2: reverse-graph DFS in reverse finish order; each tree is one
    // strongly-connected component.
    let mut visited = vec![false; rows];
    let mut components = Vec::new();
    let mut work: Vec<NodeId> = Vec::new();

    for &seed in finish.iter().rev() {
        if visited[seed.index()] {
            continue;
        }
        visited[seed.index()] = true;
        work.push(seed);

        let mut component = Vec::new();
        while let Some(current) = work.pop() {
            component.push(current);
            for neighbor in reverse.neighbors(current) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    work.push(neighbor);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Restrict `graph` to its single largest strongly-connected component.
///
/// Same filter semantics as
/// [`retain_largest_component`](crate::reduce::retain_largest_component):
/// survivors keep their ids, edges survive iff both endpoints do, first
/// maximal component wins ties, an empty graph stays empty.
pub fn retain_largest_scc(graph: &mut RoadGraph) -> ComponentReport {
    let components = strongly_connected_components(graph);
    retain_largest_of(graph, components)
}
