//! The intermediate shape both producers emit.

use rustc_hash::FxHashMap;

use rn_core::GeoPoint;

/// A directed link descriptor in the external identifier space.
///
/// Length and speed are already final here: the producer owns weight
/// computation (haversine for geographic sources, unit length for synthetic
/// ones), assembly only remaps identifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawLink {
    pub from_ext: i64,
    pub to_ext: i64,
    pub length_km: f64,
    pub speed_kmh: f64,
}

/// Producer output: every node the source declared, keyed by external id,
/// plus directed links in emission order.
///
/// The node table may be much larger than the final graph — nodes never
/// referenced by a link are dropped during assembly.  Link order is the
/// only ordered part of the contract; it drives internal id assignment and
/// therefore output determinism.
#[derive(Debug, Default, Clone)]
pub struct RawModel {
    pub nodes: FxHashMap<i64, GeoPoint>,
    pub links: Vec<RawLink>,
}

impl RawModel {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
