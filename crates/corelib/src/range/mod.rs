//! Token ranges: the unit of ownership handed to downstream sharding.
//!
//! A key `k` is dispatched to the owner of the range reporting
//! [`BoundsCheck::Overlap`] for `k`.

pub mod set;
pub mod token_range;

pub use set::RangeSet;
pub use token_range::{BoundsCheck, TokenRange};
