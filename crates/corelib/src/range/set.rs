//! Ordered collections of token ranges.

use serde::Serialize;

use crate::range::token_range::{BoundsCheck, TokenRange};
use crate::token::Token;

/// Ranges kept in the order they were produced (ascending by `min` for
/// everything the partitioners return).
///
/// Lookups are linear: a set usually holds the ranges of a single
/// instance, not the whole ring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RangeSet<T> {
    ranges: Vec<TokenRange<T>>,
}

impl<T> Default for RangeSet<T> {
    fn default() -> Self {
        Self { ranges: Vec::new() }
    }
}

impl<T: Token> RangeSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, range: TokenRange<T>) {
        self.ranges.push(range);
    }

    /// True iff some member range overlaps `token`.
    pub fn contains(&self, token: T) -> bool {
        self.find(token).is_some()
    }

    /// The first member range overlapping `token`.
    pub fn find(&self, token: T) -> Option<&TokenRange<T>> {
        self.ranges
            .iter()
            .find(|range| range.cmp_token(token) == BoundsCheck::Overlap)
    }

    pub fn first(&self) -> Option<&TokenRange<T>> {
        self.ranges.first()
    }

    pub fn last(&self) -> Option<&TokenRange<T>> {
        self.ranges.last()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenRange<T>> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[TokenRange<T>] {
        &self.ranges
    }

    /// Total keys covered, assuming members do not overlap.
    pub fn key_count(&self) -> u128 {
        self.ranges.iter().map(TokenRange::key_count).sum()
    }

    pub fn into_vec(self) -> Vec<TokenRange<T>> {
        self.ranges
    }
}

impl<T> From<Vec<TokenRange<T>>> for RangeSet<T> {
    fn from(ranges: Vec<TokenRange<T>>) -> Self {
        Self { ranges }
    }
}

impl<T> FromIterator<TokenRange<T>> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = TokenRange<T>>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for RangeSet<T> {
    type Item = TokenRange<T>;
    type IntoIter = std::vec::IntoIter<TokenRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
    type Item = &'a TokenRange<T>;
    type IntoIter = std::slice::Iter<'a, TokenRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
