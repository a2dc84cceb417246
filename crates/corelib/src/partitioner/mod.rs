//! Partitioner abstraction.
//!
//! Partitioners turn one ring snapshot into the token ranges an instance
//! is responsible for:
//!
//! - [`SingleTokenPartitioner`]: one token per instance, equal-width slots
//! - [`MultiTokenPartitioner`]: many tokens per instance, ranges follow the
//!   tokens
//! - [`RingPartition`]: every range of the ring at once, for key lookup

pub mod multi;
pub mod ring;
pub mod single;
pub mod traits;

pub use multi::MultiTokenPartitioner;
pub use ring::RingPartition;
pub use single::SingleTokenPartitioner;
pub use traits::Partitioner;
