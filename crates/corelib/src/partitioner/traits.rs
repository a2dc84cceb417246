//! Core partitioner trait definitions.

use crate::instance::Instance;
use crate::token::{Keyspace, Token};

/// A partitioner computes the slice of the keyspace owned by one instance.
///
/// Partitioners are stateless apart from their keyspace and never mutate
/// the snapshot they are given, so one snapshot can be shared by
/// concurrent callers.
pub trait Partitioner<T: Token>: Send + Sync + 'static {
    /// What a single computation yields.
    type Output;

    /// Computes the ownership of instance `id` within `instances`.
    ///
    /// # Arguments
    ///
    /// * `id` - The instance to compute ranges for
    /// * `instances` - One immutable ring snapshot
    fn compute(&self, id: &str, instances: &[Instance<T>]) -> Self::Output;

    /// The keyspace this partitioner divides.
    fn keyspace(&self) -> &Keyspace<T>;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}
