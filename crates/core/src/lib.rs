//! Consistent hash ring backed by an unbalanced binary search tree.
//!
//! The ring only answers "which stored value owns this key"; it never
//! touches application data.

pub mod error;
pub mod hasher;
pub mod iter;
pub mod node;
pub mod ring;

pub use crate::error::{RingError, RingResult};
pub use crate::hasher::{IdentityHasher, KeyHasher, StdKeyHasher};
pub use crate::node::KeyedNode;
pub use crate::ring::HashRing;
