//! `rn-core` — foundational types for the `rust_rn` road-network toolkit.
//!
//! This crate is a dependency of every other `rn-*` crate.  It intentionally
//! has no `rn-*` dependencies and minimal external ones (only optional
//! `serde`).  Everything here is infallible, so there is no error type —
//! fallible subsystems (`rn-ingest`, `rn-output`) carry their own.
//!
//! # What lives here
//!
//! | Module  | Contents                        |
//! |---------|---------------------------------|
//! | [`ids`] | `NodeId`, `EdgeId`              |
//! | [`geo`] | `GeoPoint`, haversine distance  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |
//!           | Required by `rn-output`.                             |

pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
