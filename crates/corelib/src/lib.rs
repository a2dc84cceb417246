//! Core library for token-range partitioning.
//!
//! Given one snapshot of ring members and the tokens they hold, this crate
//! computes which instance owns which slice of the keyspace:
//! - Token types and the bounded keyspace
//! - Instances and ring snapshots
//! - Token ranges and range sets
//! - The sorted k-way merge of every token in the ring
//! - Single-token and multi-token partitioners
//!
//! Everything is pure and synchronous. Inputs are never mutated, so a
//! snapshot can be shared by concurrent callers.

pub mod error;
pub mod instance;
pub mod merge;
pub mod partitioner;
pub mod range;
pub mod token;
pub mod vnode;

pub use error::{Error, Result};
pub use instance::{Instance, InstanceId, RingSnapshot};
pub use merge::SortedTokenMergeIterator;
pub use partitioner::{MultiTokenPartitioner, Partitioner, RingPartition, SingleTokenPartitioner};
pub use range::{BoundsCheck, RangeSet, TokenRange};
pub use token::{Keyspace, Token};
pub use vnode::VirtualNode;
