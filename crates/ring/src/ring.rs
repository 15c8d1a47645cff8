use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    error::RingError,
    hasher::{KeyHasher, Xxh3Hasher},
    node::{Node, NodeStatus},
};

/// What `add_node` did with the node it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    /// Same name already on the ring: marked running again, handle replaced.
    Reactivated,
    /// Position taken by a different name. The ring is left untouched.
    Collision { occupant: Arc<str> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingEntry {
    pub position: u64,
    pub name: Arc<str>,
    pub status: NodeStatus,
}

// `keys[i]` is the position of `nodes[i]`; `keys` is strictly ascending.
struct RingState<T> {
    keys: Vec<u64>,
    nodes: Vec<Node<T>>,
}

pub struct HashRing<T> {
    state: RwLock<RingState<T>>,
    capacity: u64,
    hasher: Arc<dyn KeyHasher>,
}

impl<T: Clone> HashRing<T> {
    pub fn new(capacity: u64, hasher: Arc<dyn KeyHasher>) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity);
        }

        Ok(Self {
            state: RwLock::new(RingState {
                keys: Vec::new(),
                nodes: Vec::new(),
            }),
            capacity,
            hasher,
        })
    }

    pub fn with_capacity(capacity: u64) -> Result<Self, RingError> {
        Self::new(capacity, Arc::new(Xxh3Hasher))
    }

    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    #[inline]
    pub fn position_of(&self, key: &str) -> u64 {
        self.hasher.hash(key) % self.capacity
    }

    pub fn add_node(&self, node: Node<T>) -> (u64, AddOutcome) {
        let position = self.position_of(&node.name);
        let mut state = self.state.write();

        let outcome = match state.keys.binary_search(&position) {
            Ok(index) => {
                let slot = &mut state.nodes[index];

                if slot.name == node.name {
                    slot.status = NodeStatus::Running;
                    slot.client = node.client;
                    AddOutcome::Reactivated
                } else {
                    AddOutcome::Collision {
                        occupant: slot.name.clone(),
                    }
                }
            }
            Err(index) => {
                state.keys.insert(index, position);
                state.nodes.insert(index, node);
                AddOutcome::Inserted
            }
        };

        debug!(position, ?outcome, size = state.keys.len(), "ring add");

        (position, outcome)
    }

    /// Deletes the node so its key range falls to its successor.
    pub fn remove_node(&self, name: &str) -> bool {
        let position = self.position_of(name);
        let mut state = self.state.write();

        let Some(index) = Self::slot_of(&state, position, name) else {
            return false;
        };

        state.keys.remove(index);
        state.nodes.remove(index);
        debug!(%name, position, size = state.keys.len(), "ring remove");

        true
    }

    /// Marks the node stopped without touching the ring geometry.
    pub fn stop_node(&self, name: &str) -> bool {
        let position = self.position_of(name);
        let mut state = self.state.write();

        let Some(index) = Self::slot_of(&state, position, name) else {
            return false;
        };

        state.nodes[index].status = NodeStatus::Stopped;
        debug!(%name, position, "ring stop");

        true
    }

    /// Owner of `key`: the first node strictly after the key's position,
    /// wrapping to the lowest one.
    pub fn pick_node(&self, key: &str) -> Result<Node<T>, RingError> {
        let target = self.position_of(key);
        let state = self.state.read();

        if state.keys.is_empty() {
            return Err(RingError::Empty);
        }

        let index = state.keys.partition_point(|&k| k <= target);
        let index = if index == state.keys.len() { 0 } else { index };

        Ok(state.nodes[index].clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        let position = self.position_of(name);
        Self::slot_of(&self.state.read(), position, name).is_some()
    }

    pub fn len(&self) -> usize {
        self.state.read().keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().keys.is_empty()
    }

    pub fn snapshot(&self) -> Vec<RingEntry> {
        let state = self.state.read();

        state
            .keys
            .iter()
            .zip(state.nodes.iter())
            .map(|(&position, node)| RingEntry {
                position,
                name: node.name.clone(),
                status: node.status,
            })
            .collect()
    }

    #[inline]
    fn slot_of(state: &RingState<T>, position: u64, name: &str) -> Option<usize> {
        state
            .keys
            .binary_search(&position)
            .ok()
            .filter(|&index| &*state.nodes[index].name == name)
    }
}
