//! Consistent-hash membership ring.
//!
//! Nodes are placed at `hash(name) % capacity` on a circular position space.
//! A key belongs to the first node whose position is strictly greater than the
//! key's own position, wrapping around to the lowest position.

pub mod error;
pub mod hasher;
pub mod node;
pub mod ring;

pub use error::RingError;
pub use hasher::{KeyHasher, Xxh3Hasher};
pub use node::{Node, NodeStatus};
pub use ring::{AddOutcome, HashRing, RingEntry};

pub const DEFAULT_RING_SIZE: u64 = 1337;
