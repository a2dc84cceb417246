//! Sorted merge of every token in the ring.
//!
//! Three stages, each usable on its own:
//!
//! ```text
//! TokenCursor (one per instance, sorted copy, peekable)
//!        │
//!        ▼
//! MergedTokens (k-way merge, ascending VirtualNode stream)
//!        │
//!        ▼
//! SortedTokenMergeIterator (boundary mapping into TokenRange)
//! ```

pub mod cursor;
pub mod iterator;
pub mod merged;

pub use cursor::TokenCursor;
pub use iterator::SortedTokenMergeIterator;
pub use merged::MergedTokens;
