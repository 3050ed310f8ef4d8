//! `rn-graph` — directed road graph, component reduction, and routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `Node`, `Edge`, `RoadGraph`, `Adjacency` (CSR index)      |
//! | [`reduce`] | `connected_components`, `retain_largest_component`        |
//! | [`scc`]    | `strongly_connected_components`, `retain_largest_scc`     |
//! | [`router`] | `Router` trait, `Route`, `AStarRouter`                    |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on model types.  |

pub mod error;
pub mod graph;
pub mod reduce;
pub mod router;
pub mod scc;


pub use error::{GraphError, GraphResult};
pub use graph::{Adjacency, Edge, Node, RoadGraph};
pub use reduce::{connected_components, retain_largest_component, ComponentReport};
pub use router::{AStarRouter, Route, Router};
pub use scc::{retain_largest_scc, strongly_connected_components};
