//! Synthetic lattice producer.
//!
//! Generates a W×H grid of nodes with bidirectional unit-length links to
//! the right and downward neighbors.  Coordinates are placeholder planar
//! values (0.01 per row/column step) — enough signal for routing heuristics,
//! not real geography.

use rustc_hash::FxHashMap;

use rn_core::GeoPoint;

use crate::model::{RawLink, RawModel};

/// Every grid link is exactly one kilometre.
const GRID_EDGE_KM: f64 = 1.0;

/// Lattice dimensions and the uniform speed applied to every link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Nodes per row.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    pub speed_kmh: f64,
}

/// Synthesize the lattice raw model.
///
/// External ids are `row * width + col`.  For every node, links to the
/// right neighbor (if any) then the neighbor below (if any) are emitted,
/// forward then reverse, giving `2 * (W*(H-1) + H*(W-1))` links in total.
pub fn generate_grid(spec: &GridSpec) -> RawModel {
    let mut nodes = FxHashMap::default();
    let mut links = Vec::new();

    for row in 0..spec.height {
        for col in 0..spec.width {
            let id = i64::from(row * spec.width + col);
            nodes.insert(id, GeoPoint::new(f64::from(row) * 0.01, f64::from(col) * 0.01));
        }
    }

    let mut both_ways = |from: i64, to: i64| {
        links.push(RawLink {
            from_ext: from,
            to_ext: to,
            length_km: GRID_EDGE_KM,
            speed_kmh: spec.speed_kmh,
        });
        links.push(RawLink {
            from_ext: to,
            to_ext: from,
            length_km: GRID_EDGE_KM,
            speed_kmh: spec.speed_kmh,
        });
    };

    for row in 0..spec.height {
        for col in 0..spec.width {
            let u = i64::from(row * spec.width + col);
            if col + 1 < spec.width {
                both_ways(u, u + 1);
            }
            if row + 1 < spec.height {
                both_ways(u, u + i64::from(spec.width));
            }
        }
    }

    RawModel { nodes, links }
}
