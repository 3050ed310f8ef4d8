//! Document serialization model.
//!
//! Nodes serialize through their derives (`{ id, x, y }`).  Edge rows are
//! serialized by hand because the speed key is runtime configuration, not a
//! compile-time rename.

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use rn_graph::{Edge, RoadGraph};

/// Which key carries the edge speed in the written document.
///
/// Both spellings exist in the wild: the OSM converter historically wrote
/// `speedLimit`, the grid generator `speed_limit`.  Pick whichever the
/// consumer expects; the reader accepts either (plus the all-lowercase
/// `speedlimit` some runtimes emitted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldNaming {
    /// `speedLimit`
    #[default]
    CamelCase,
    /// `speed_limit`
    SnakeCase,
}

impl FieldNaming {
    pub(crate) fn speed_key(self) -> &'static str {
        match self {
            FieldNaming::CamelCase => "speedLimit",
            FieldNaming::SnakeCase => "speed_limit",
        }
    }
}

/// The full `{ nodes, edges }` document, borrowing the graph.
pub(crate) struct GraphDoc<'a> {
    pub graph: &'a RoadGraph,
    pub naming: FieldNaming,
}

impl Serialize for GraphDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("GraphDoc", 2)?;
        doc.serialize_field("nodes", &self.graph.nodes)?;
        doc.serialize_field("edges", &EdgeSeq { edges: &self.graph.edges, naming: self.naming })?;
        doc.end()
    }
}

struct EdgeSeq<'a> {
    edges: &'a [Edge],
    naming: FieldNaming,
}

impl Serialize for EdgeSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.edges.len()))?;
        for edge in self.edges {
            seq.serialize_element(&EdgeRow { edge, naming: self.naming })?;
        }
        seq.end()
    }
}

struct EdgeRow<'a> {
    edge: &'a Edge,
    naming: FieldNaming,
}

impl Serialize for EdgeRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("Edge", 5)?;
        row.serialize_field("id", &self.edge.id.0)?;
        row.serialize_field("from", &self.edge.from.0)?;
        row.serialize_field("to", &self.edge.to.0)?;
        row.serialize_field("length", &self.edge.length_km)?;
        row.serialize_field(self.naming.speed_key(), &self.edge.speed_kmh)?;
        row.end()
    }
}
