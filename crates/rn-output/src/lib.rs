//! `rn-output` — the graph document format.
//!
//! One structured document holds the whole snapshot:
//!
//! ```json
//! { "nodes": [ { "id": 1, "x": 34.9, "y": 32.0 }, … ],
//!   "edges": [ { "id": 1, "from": 1, "to": 2,
//!                "length": 0.94, "speedLimit": 50.0 }, … ] }
//! ```
//!
//! Collection order is preserved exactly as constructed.  The edge speed
//! key is configurable ([`FieldNaming`]) because the two legacy pipelines
//! disagreed on it; the reader accepts every historical variant.
//!
//! # Crate layout
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`doc`]   | `FieldNaming`, document serialization     |
//! | [`json`]  | `JsonWriter`, `read_graph`, `LoadStats`   |
//! | [`error`] | `OutputError`, `OutputResult<T>`          |

pub mod doc;
pub mod error;
pub mod json;

#[cfg(test)]
mod tests;

pub use doc::FieldNaming;
pub use error::{OutputError, OutputResult};
pub use json::{read_graph, JsonWriter, LoadStats};
