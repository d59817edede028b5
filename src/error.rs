//! Error types for share decoding and secret reconstruction.

use std::path::PathBuf;

use num_bigint::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every variant is terminal for the reconstruction attempt that produced it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("share identifier {id:?} is not a base-10 non-negative integer")]
    MalformedIndex { id: String },

    #[error("share {id:?} has a malformed value: {reason}")]
    MalformedShareValue { id: String, reason: String },

    #[error("not enough shares: need {needed}, got {got}")]
    InsufficientShares { needed: usize, got: usize },

    #[error("two selected shares have the same x-coordinate {x}")]
    DegenerateInterpolation { x: BigInt },

    #[error("interpolated value {fraction} is not an integer (~{decimal})")]
    NonIntegerResult { fraction: String, decimal: String },

    #[error("threshold k must be at least 1")]
    InvalidThreshold,

    #[error("share document has no \"keys\" metadata object")]
    MissingMetadata,

    #[error("malformed share document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
