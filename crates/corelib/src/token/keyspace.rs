//! The bounded, circular keyspace `[0, MAX]`.

use serde::Serialize;

use crate::token::Token;

/// The ring's keyspace: every token in `[0, max]`.
///
/// `max` is a runtime bound so a ring narrower than its integer width
/// (e.g. `[0, 99]` over `u32`) can be partitioned the same way as a full
/// 32- or 64-bit fingerprint space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Keyspace<T> {
    max: T,
}

impl<T: Token> Keyspace<T> {
    /// A keyspace ending at `max`.
    pub fn new(max: T) -> Self {
        Self { max }
    }

    /// The whole width of `T`.
    pub fn full() -> Self {
        Self { max: T::max_token() }
    }

    pub fn min(&self) -> T {
        T::zero()
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// True if `token` lies inside the keyspace.
    pub fn contains(&self, token: T) -> bool {
        token <= self.max
    }

    /// Number of keys in the keyspace (`max + 1`), computed without overflow.
    pub fn size(&self) -> u128 {
        self.max.to_u128() + 1
    }
}

impl<T: Token> Default for Keyspace<T> {
    fn default() -> Self {
        Self::full()
    }
}
