//! External-to-internal id remapping.

use rustc_hash::FxHashMap;

use rn_core::NodeId;

/// A bijective map from external node identifiers to dense internal ids,
/// assigned monotonically in first-request order.
///
/// The remapper is passed explicitly through the assembly stage — it owns
/// no global state, and [`get_or_assign`](Self::get_or_assign) is
/// idempotent, so repeated requests for the same external id always return
/// the same internal id.
#[derive(Debug, Default)]
pub struct IdRemapper {
    map: FxHashMap<i64, NodeId>,
    next: u32,
}

impl IdRemapper {
    /// A remapper whose first assigned id is `base` (pipelines differ:
    /// the OSM converter numbers from 1, the grid generator from 0).
    pub fn with_base(base: u32) -> Self {
        Self { map: FxHashMap::default(), next: base }
    }

    /// The internal id for `external`, assigning the next dense id on first
    /// encounter.
    pub fn get_or_assign(&mut self, external: i64) -> NodeId {
        *self.map.entry(external).or_insert_with(|| {
            let id = NodeId(self.next);
            self.next += 1;
            id
        })
    }

    /// The internal id for `external`, if one was ever assigned.
    pub fn get(&self, external: i64) -> Option<NodeId> {
        self.map.get(&external).copied()
    }

    /// Number of assignments made so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
