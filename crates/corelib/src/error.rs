//! Error types for the core library.

use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Token values are carried as `u128` so the error type stays independent
/// of the keyspace width.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested instance is not a member of the snapshot.
    #[error("instance not found: {0}")]
    InstanceNotFound(String),

    /// More instances than keys; equal-width slots would be empty.
    #[error("keyspace [0, {max}] too small for {instances} instances")]
    KeyspaceTooSmall { instances: usize, max: u128 },

    /// A range whose lower bound lies above its upper bound.
    #[error("invalid token range: min {min} > max {max}")]
    InvalidRange { min: u128, max: u128 },

    /// The snapshot breaks an invariant the partitioners assume.
    #[error("invalid ring snapshot: {0}")]
    InvalidSnapshot(String),
}
