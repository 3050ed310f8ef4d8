//! `rn-ingest` — raw-model producers and graph assembly.
//!
//! Two producers — the OSM XML reader and the synthetic grid generator —
//! emit the same intermediate shape, [`RawModel`]: a node table keyed by
//! external id plus an ordered list of directed link descriptors.  They are
//! independent functions sharing an output contract, not implementations of
//! a runtime-dispatched trait; a pipeline picks one at compile time.
//!
//! [`assemble`] then turns a `RawModel` into an [`rn_graph::RoadGraph`],
//! remapping external ids to dense internal ones in first-seen link order.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`model`]    | `RawModel`, `RawLink` — the producer contract    |
//! | [`osm`]      | `parse_osm` (XML extract), `OsmStats`            |
//! | [`grid`]     | `GridSpec`, `generate_grid`                      |
//! | [`remap`]    | `IdRemapper` — external → dense internal ids     |
//! | [`assemble`] | `assemble`, `AssembleStats`                      |
//! | [`error`]    | `IngestError`, `IngestResult<T>`                 |

pub mod assemble;
pub mod error;
pub mod grid;
pub mod model;
pub mod osm;
pub mod remap;

#[cfg(test)]
mod tests;

pub use assemble::{assemble, AssembleStats};
pub use error::{IngestError, IngestResult};
pub use grid::{generate_grid, GridSpec};
pub use model::{RawLink, RawModel};
pub use osm::{parse_osm, parse_osm_reader, OsmStats, DEFAULT_SPEED_KMH, MIN_EDGE_KM};
pub use remap::IdRemapper;
