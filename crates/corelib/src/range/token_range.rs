//! Inclusive slices of the keyspace and their owners.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::instance::InstanceId;
use crate::token::Token;

/// Where a token lies relative to a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundsCheck {
    /// Token is below the range's `min`.
    Before,
    /// Token is inside `[min, max]`.
    Overlap,
    /// Token is above the range's `max`.
    After,
}

/// The slice `[min, max]` of the keyspace owned by one instance.
///
/// # Invariants
///
/// - `min <= max`
/// - Both bounds are inclusive
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TokenRange<T> {
    owner: InstanceId,
    min: T,
    max: T,
}

impl<T: Token> TokenRange<T> {
    /// Creates a range after checking `min <= max`.
    pub fn new(owner: impl Into<InstanceId>, min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange {
                min: min.to_u128(),
                max: max.to_u128(),
            });
        }
        Ok(Self::from_bounds(owner.into(), min, max))
    }

    /// Callers must have established `min <= max`.
    pub(crate) fn from_bounds(owner: InstanceId, min: T, max: T) -> Self {
        debug_assert!(min <= max, "token range min {} > max {}", min, max);
        Self { owner, min, max }
    }

    pub fn owner(&self) -> &InstanceId {
        &self.owner
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Classifies `token` against this range.
    #[inline]
    pub fn cmp_token(&self, token: T) -> BoundsCheck {
        if token < self.min {
            BoundsCheck::Before
        } else if token > self.max {
            BoundsCheck::After
        } else {
            BoundsCheck::Overlap
        }
    }

    #[inline]
    pub fn contains(&self, token: T) -> bool {
        self.cmp_token(token) == BoundsCheck::Overlap
    }

    /// Number of keys covered. Never zero.
    pub fn key_count(&self) -> u128 {
        self.max.to_u128() - self.min.to_u128() + 1
    }
}

impl<T: Token> fmt::Display for TokenRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[{}, {}]", self.owner, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_token() {
        let range = TokenRange::new("a", 10u32, 20).unwrap();
        assert_eq!(range.cmp_token(9), BoundsCheck::Before);
        assert_eq!(range.cmp_token(10), BoundsCheck::Overlap);
        assert_eq!(range.cmp_token(15), BoundsCheck::Overlap);
        assert_eq!(range.cmp_token(20), BoundsCheck::Overlap);
        assert_eq!(range.cmp_token(21), BoundsCheck::After);
    }

    #[test]
    fn test_single_key_range() {
        let range = TokenRange::new("a", 7u64, 7).unwrap();
        assert!(range.contains(7));
        assert!(!range.contains(6));
        assert_eq!(range.key_count(), 1);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert_eq!(
            TokenRange::new("a", 5u32, 4),
            Err(Error::InvalidRange { min: 5, max: 4 })
        );
    }

    #[test]
    fn test_key_count_full_width() {
        let range = TokenRange::new("a", 0u64, u64::MAX).unwrap();
        assert_eq!(range.key_count(), u64::MAX as u128 + 1);
    }

    #[test]
    fn test_display() {
        let range = TokenRange::new("ingester-1", 0u32, 32).unwrap();
        assert_eq!(range.to_string(), "ingester-1:[0, 32]");
    }
}
