//! Core token trait definitions.
//!
//! The `Token` trait abstracts over the width of the keyspace. Arithmetic
//! that may cross the top of the ring goes through `u128` or the checked
//! helpers so it never wraps silently.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A point on the ring.
///
/// Tokens are plain unsigned integers: immutable, cheap to copy, compare
/// and hash. Implementations exist for `u16`, `u32` and `u64`.
pub trait Token: Copy + Ord + Hash + Send + Sync + Debug + Display + 'static {
    /// Minimum token value (start of ring).
    fn zero() -> Self;
    /// Maximum token value representable at this width.
    fn max_token() -> Self;
    /// True if this token is the minimum.
    fn is_zero(&self) -> bool;
    /// True if this token is the maximum representable value.
    fn is_max(&self) -> bool;
    /// The next token, or `None` at the top of the width.
    fn checked_next(self) -> Option<Self>;
    /// Widen to `u128`.
    fn to_u128(self) -> u128;
    /// Narrow from `u128`, `None` if the value does not fit.
    fn from_u128(value: u128) -> Option<Self>;
}

macro_rules! impl_token {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Token for $ty {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn max_token() -> Self {
                    <$ty>::MAX
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn is_max(&self) -> bool {
                    *self == <$ty>::MAX
                }

                #[inline]
                fn checked_next(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    u128::from(self)
                }

                #[inline]
                fn from_u128(value: u128) -> Option<Self> {
                    <$ty>::try_from(value).ok()
                }
            }
        )*
    };
}

impl_token!(u16, u32, u64);
