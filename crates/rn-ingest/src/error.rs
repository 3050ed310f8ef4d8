//! Ingest-subsystem error type.
//!
//! Only structural failures surface here: a missing input file or a document
//! that is not parseable as the expected format.  Per-element data-quality
//! problems (malformed speed tags, dangling node references) are tolerated,
//! counted in the producer's stats, and never abort a run.

use thiserror::Error;

/// Errors produced by `rn-ingest`.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OSM parse error: {0}")]
    Xml(String),
}

pub type IngestResult<T> = Result<T, IngestError>;
