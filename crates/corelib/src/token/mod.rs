//! Token abstraction module.
//!
//! Tokens are points on the ring. The keyspace width is picked by the token
//! type; the upper bound of the ring by [`Keyspace`].

pub mod keyspace;
pub mod traits;

pub use keyspace::Keyspace;
pub use traits::Token;
